//! # LabelKit Core
//!
//! Core types shared by the LabelKit crates: the error taxonomy used at the
//! template model boundary, paper definitions and designer constants.

pub mod constants;
pub mod error;
pub mod paper;

pub use error::{DesignerError, Error, Result};
pub use paper::{Orientation, PaperSize};
