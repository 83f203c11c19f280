//! Error handling for LabelKit
//!
//! Template mutations are validated at the model boundary instead of relying on
//! UI affordances. Every variant of [`DesignerError`] is locally recoverable:
//! the rejected mutation leaves the template unchanged.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Errors raised by template, field and catalog operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignerError {
    /// A position or size update would place the field outside the template
    #[error(
        "Field '{id}' at ({x}, {y}) size {width}x{height} exceeds template bounds {template_width}x{template_height}"
    )]
    OutOfBoundsField {
        /// The field id.
        id: String,
        /// Requested left edge.
        x: f64,
        /// Requested top edge.
        y: f64,
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
        /// Width of the containing template.
        template_width: f64,
        /// Height of the containing template.
        template_height: f64,
    },

    /// A field with the same id is already placed on the template
    #[error("Field id '{id}' is already bound to this template")]
    DuplicateFieldId {
        /// The duplicated id.
        id: String,
    },

    /// No field with this id exists on the template
    #[error("Unknown field id '{id}'")]
    UnknownFieldId {
        /// The missing id.
        id: String,
    },

    /// A field's font size lies outside the supported range
    #[error("Field '{id}' font size {size} is outside {min}..={max}")]
    InvalidFontSize {
        /// The field id.
        id: String,
        /// The rejected size.
        size: u32,
        /// Smallest accepted size.
        min: u32,
        /// Largest accepted size.
        max: u32,
    },

    /// Template dimensions must be finite and positive
    #[error("Invalid template size {width}x{height}")]
    InvalidTemplateSize { width: f64, height: f64 },

    /// A selection-based edit was requested while nothing is selected
    #[error("No field is selected")]
    NoSelection,

    /// The field kind has no renderer, or is not allowed on this artifact
    #[error("Invalid field kind '{kind}'")]
    InvalidFieldKind {
        /// The offending kind name.
        kind: String,
    },
}

impl DesignerError {
    /// Shorthand for [`DesignerError::UnknownFieldId`].
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::UnknownFieldId { id: id.into() }
    }

    /// Shorthand for [`DesignerError::DuplicateFieldId`].
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateFieldId { id: id.into() }
    }

    /// Shorthand for [`DesignerError::InvalidFieldKind`].
    pub fn invalid_kind(kind: impl Into<String>) -> Self {
        Self::InvalidFieldKind { kind: kind.into() }
    }
}

/// Main error type for LabelKit
#[derive(Error, Debug)]
pub enum Error {
    /// Template model error
    #[error(transparent)]
    Designer(#[from] DesignerError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error rejected a template mutation
    pub fn is_rejected_mutation(&self) -> bool {
        matches!(self, Error::Designer(_))
    }
}

/// Result type for LabelKit operations
pub type Result<T> = std::result::Result<T, Error>;
