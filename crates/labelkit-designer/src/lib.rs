//! # LabelKit Designer
//!
//! Visual designer and renderer for fixed-size print artifacts: product
//! labels, delivery slips and packing slips. One template model is edited on
//! an interactive canvas and rendered identically in the editor, the
//! multi-copy preview grid and print output.
//!
//! ## Architecture
//!
//! ```text
//! Catalog (bindable data points)
//!   └── Binding -> Field
//!
//! Canvas (edited template)
//!   ├── Template (ordered fields, containment invariant)
//!   ├── Viewport (discrete zoom, screen <-> template space)
//!   ├── SelectionManager (single selection)
//!   └── DragState (Idle -> Dragging -> Idle)
//!
//! FieldRenderer (interactive | static)
//!   ├── Editor canvas
//!   ├── PreviewGrid
//!   └── PrintJob -> PrintSink / DocumentEncoder
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use labelkit_designer::{ArtifactKind, CatalogEntry, DesignerState, FieldKind};
//!
//! let mut designer = DesignerState::new(ArtifactKind::Label);
//! let entry = CatalogEntry::new("origin", "Country of Origin", FieldKind::Text);
//! designer.on_add_field(&entry)?;
//! assert!(designer.is_bound(&entry));
//!
//! let svg = designer.render_editor();
//! assert!(svg.contains("data-field-id=\"origin\""));
//! # Ok::<(), labelkit_core::DesignerError>(())
//! ```

pub mod canvas;
pub mod catalog;
pub mod designer_state;
pub mod model;
pub mod preview;
pub mod print;
pub mod renderer;
pub mod selection_manager;
pub mod templates;
pub mod viewport;

pub use canvas::{Canvas, DragState, PointerEvent, PointerOutcome, ScreenPoint};
pub use catalog::{Catalog, CatalogEntry, CatalogView, Category, FilteredCategory};
pub use designer_state::DesignerState;
pub use model::{ArtifactKind, Field, FieldKind, FieldUpdate, FontWeight, Point, Rect, Size, Template};
pub use preview::PreviewGrid;
pub use print::{DocumentEncoder, FileSink, PrintDocument, PrintJob, PrintSink, Quantity};
pub use renderer::{FieldRenderer, PlaceholderEncoder, RenderMode, RenderOptions, SymbolEncoder};
pub use selection_manager::SelectionManager;
pub use templates::default_template;
pub use viewport::Viewport;
