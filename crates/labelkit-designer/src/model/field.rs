//! Field definitions: the atomic placeable unit of a template.

use super::{Point, Rect, Size};
use crate::catalog::CatalogEntry;
use labelkit_core::constants::{
    DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE, NEW_FIELD_HEIGHT, NEW_FIELD_WIDTH,
    NEW_FIELD_X, NEW_FIELD_Y,
};
use labelkit_core::DesignerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content a field draws. Each variant has exactly one renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Barcode,
    QrCode,
    Image,
    Date,
    Number,
}

impl FieldKind {
    /// Every kind, in declaration order.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Text,
        FieldKind::Barcode,
        FieldKind::QrCode,
        FieldKind::Image,
        FieldKind::Date,
        FieldKind::Number,
    ];

    /// Get kind as its wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Barcode => "barcode",
            FieldKind::QrCode => "qrcode",
            FieldKind::Image => "image",
            FieldKind::Date => "date",
            FieldKind::Number => "number",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = DesignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DesignerError::invalid_kind(s))
    }
}

/// Font weight of text-like fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// A positioned, typed, sized unit of content drawn on a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    /// Display name, used as fallback text when `value` is empty.
    pub name: String,
    pub kind: FieldKind,
    /// Textual value; numeric and date kinds store their textual representation.
    pub value: String,
    pub font_size: u32,
    pub font_weight: FontWeight,
    pub position: Point,
    pub size: Size,
    pub visible: bool,
}

/// Clamps a font size to `MIN_FONT_SIZE..=MAX_FONT_SIZE`.
pub fn clamp_font_size(size: u32) -> u32 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

impl Field {
    /// Creates a visible field with default typography.
    pub fn new(
        id: impl Into<String>,
        kind: FieldKind,
        value: impl Into<String>,
        position: Point,
        size: Size,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind,
            value: value.into(),
            font_size: DEFAULT_FONT_SIZE,
            font_weight: FontWeight::Normal,
            position,
            size,
            visible: true,
        }
    }

    /// Builds the field produced by binding a catalog entry.
    pub fn from_catalog(entry: &CatalogEntry) -> Self {
        let sample = format!("Sample {}", entry.label);
        Self {
            id: entry.id.clone(),
            name: sample.clone(),
            kind: entry.kind,
            value: sample,
            font_size: DEFAULT_FONT_SIZE,
            font_weight: FontWeight::Normal,
            position: Point::new(NEW_FIELD_X, NEW_FIELD_Y),
            size: Size::new(NEW_FIELD_WIDTH, NEW_FIELD_HEIGHT),
            visible: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets typography; the size is clamped to the supported range.
    pub fn with_font(mut self, font_size: u32, font_weight: FontWeight) -> Self {
        self.font_size = clamp_font_size(font_size);
        self.font_weight = font_weight;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Field box in template space.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            self.size.height,
        )
    }

    /// Text drawn for text-like kinds: the value, or the name when the value is empty.
    pub fn display_text(&self) -> &str {
        if self.value.trim().is_empty() {
            &self.name
        } else {
            &self.value
        }
    }
}

/// Partial update submitted by the property panel or the host.
///
/// `None` leaves the corresponding attribute untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldUpdate {
    pub name: Option<String>,
    pub value: Option<String>,
    pub font_size: Option<u32>,
    pub font_weight: Option<FontWeight>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub visible: Option<bool>,
}

impl FieldUpdate {
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    pub fn visible(visible: bool) -> Self {
        Self {
            visible: Some(visible),
            ..Default::default()
        }
    }

    /// True if the update touches position or size.
    pub fn touches_geometry(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.width.is_some() || self.height.is_some()
    }

    /// Applies the update to a copy of `field`. Font size is clamped to the
    /// editor range; geometry is left for the template to validate.
    pub(crate) fn applied_to(&self, field: &Field) -> Field {
        let mut next = field.clone();
        if let Some(name) = &self.name {
            next.name = name.clone();
        }
        if let Some(value) = &self.value {
            next.value = value.clone();
        }
        if let Some(font_size) = self.font_size {
            next.font_size = clamp_font_size(font_size);
        }
        if let Some(font_weight) = self.font_weight {
            next.font_weight = font_weight;
        }
        if let Some(x) = self.x {
            next.position.x = x;
        }
        if let Some(y) = self.y {
            next.position.y = y;
        }
        if let Some(width) = self.width {
            next.size.width = width;
        }
        if let Some(height) = self.height {
            next.size.height = height;
        }
        if let Some(visible) = self.visible {
            next.visible = visible;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!("qrcode".parse::<FieldKind>(), Ok(FieldKind::QrCode));
        assert_eq!("number".parse::<FieldKind>(), Ok(FieldKind::Number));
        assert_eq!(
            "hologram".parse::<FieldKind>(),
            Err(DesignerError::invalid_kind("hologram"))
        );
    }

    #[test]
    fn test_kind_serde_matches_wire_name() {
        for kind in FieldKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_display_text_falls_back_to_name() {
        let field = Field::new("weight", FieldKind::Number, "", Point::default(), Size::default())
            .with_name("Net weight");
        assert_eq!(field.display_text(), "Net weight");

        let field = Field::new("weight", FieldKind::Number, "1.25", Point::default(), Size::default());
        assert_eq!(field.display_text(), "1.25");
    }

    #[test]
    fn test_update_clamps_font_size() {
        let field = Field::new("a", FieldKind::Text, "x", Point::default(), Size::default());
        let update = FieldUpdate {
            font_size: Some(200),
            ..Default::default()
        };
        assert_eq!(update.applied_to(&field).font_size, MAX_FONT_SIZE);

        let update = FieldUpdate {
            font_size: Some(1),
            ..Default::default()
        };
        assert_eq!(update.applied_to(&field).font_size, MIN_FONT_SIZE);
    }

    #[test]
    fn test_with_font_clamps_font_size() {
        let field = Field::new("a", FieldKind::Text, "x", Point::default(), Size::default());
        assert_eq!(field.clone().with_font(500, FontWeight::Bold).font_size, MAX_FONT_SIZE);
        assert_eq!(field.with_font(0, FontWeight::Normal).font_size, MIN_FONT_SIZE);
    }

    #[test]
    fn test_update_deserializes_partial_json() {
        let update: FieldUpdate = serde_json::from_str(r#"{"fontWeight":"bold","x":12.5}"#).unwrap();
        assert_eq!(update.font_weight, Some(FontWeight::Bold));
        assert_eq!(update.x, Some(12.5));
        assert!(update.value.is_none());
        assert!(update.touches_geometry());
    }
}
