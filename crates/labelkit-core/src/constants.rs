//! Designer-wide constants.

/// Discrete zoom levels offered by the canvas, smallest first.
pub const ZOOM_LEVELS: [f64; 7] = [0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

/// Index of `1.0` in [`ZOOM_LEVELS`].
pub const DEFAULT_ZOOM_INDEX: usize = 2;

/// Font size bounds accepted by the property editor (px).
pub const MIN_FONT_SIZE: u32 = 6;
pub const MAX_FONT_SIZE: u32 = 72;

/// Font size given to fields created from the catalog.
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// Geometry assigned to a freshly bound catalog field.
pub const NEW_FIELD_X: f64 = 10.0;
pub const NEW_FIELD_Y: f64 = 10.0;
pub const NEW_FIELD_WIDTH: f64 = 150.0;
pub const NEW_FIELD_HEIGHT: f64 = 20.0;

/// Placeholder shown for date fields whose value is empty or unparseable.
pub const DATE_PLACEHOLDER: &str = "DD/MM/YYYY";

/// Default chrono format used to display dates.
pub const DATE_DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Cells per side of the placeholder QR grid.
pub const QR_GRID_CELLS: usize = 21;

/// Characters of barcode caption kept on the interactive canvas before truncation.
pub const BARCODE_CAPTION_MAX_CHARS: usize = 20;
