//! Paper sizes and orientation for print output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical media a template is printed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    /// ISO A4 sheet
    A4,
    /// ISO A5 sheet
    A5,
    /// ISO A6 sheet (typical delivery slip)
    A6,
    /// US letter sheet
    Letter,
    /// 4x6 inch thermal label roll
    Label4x6,
    /// 62 mm continuous label roll, 100 mm cut
    Label62,
}

impl PaperSize {
    /// Portrait dimensions in millimetres as `(width, height)`.
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match self {
            Self::A4 => (210.0, 297.0),
            Self::A5 => (148.0, 210.0),
            Self::A6 => (105.0, 148.0),
            Self::Letter => (215.9, 279.4),
            Self::Label4x6 => (101.6, 152.4),
            Self::Label62 => (62.0, 100.0),
        }
    }

    /// Dimensions in millimetres with the given orientation applied.
    pub fn oriented_mm(&self, orientation: Orientation) -> (f64, f64) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

impl Default for PaperSize {
    fn default() -> Self {
        Self::A4
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A4 => write!(f, "a4"),
            Self::A5 => write!(f, "a5"),
            Self::A6 => write!(f, "a6"),
            Self::Letter => write!(f, "letter"),
            Self::Label4x6 => write!(f, "label4x6"),
            Self::Label62 => write!(f, "label62"),
        }
    }
}

impl FromStr for PaperSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(Self::A4),
            "a5" => Ok(Self::A5),
            "a6" => Ok(Self::A6),
            "letter" => Ok(Self::Letter),
            "label4x6" | "4x6" => Ok(Self::Label4x6),
            "label62" | "62mm" => Ok(Self::Label62),
            _ => Err(format!("Unknown paper size: {}", s)),
        }
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Portrait
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Portrait => write!(f, "portrait"),
            Self::Landscape => write!(f, "landscape"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            _ => Err(format!("Unknown orientation: {}", s)),
        }
    }
}
