//! Canvas for placing and dragging fields on a template.
//!
//! The canvas owns the template being edited along with its viewport, its
//! selection and the drag state machine. Pointer events arrive as discrete
//! [`PointerEvent`]s so the drag contract can be driven without a real
//! pointer device.

mod types;

pub use types::{DragState, PointerEvent, ScreenPoint};

use crate::catalog::CatalogEntry;
use crate::model::{Field, FieldUpdate, Point, Template};
use crate::selection_manager::SelectionManager;
use crate::viewport::Viewport;
use labelkit_core::DesignerError;
use tracing::debug;

/// What a pointer event did to the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerOutcome {
    /// The event had no effect.
    Ignored,
    /// A drag started on the field, which is now selected.
    DragStarted { field_id: String },
    /// The dragged field was committed to `position`.
    Moved { field_id: String, position: Point },
    /// The drag on the field ended.
    DragEnded { field_id: String },
    /// A press on empty canvas cleared the selection.
    SelectionCleared,
}

/// Canvas state managing the edited template and interactive operations.
#[derive(Debug, Clone)]
pub struct Canvas {
    template: Template,
    selection_manager: SelectionManager,
    viewport: Viewport,
    drag: DragState,
}

impl Canvas {
    /// Creates a canvas editing `template` at 100% zoom. The template is validated first.
    pub fn new(template: Template) -> Result<Self, DesignerError> {
        template.validate()?;
        Ok(Self::from_validated(template))
    }

    /// Skips validation; for templates built by [`crate::templates::default_template`].
    pub(crate) fn from_validated(template: Template) -> Self {
        debug_assert!(template.validate().is_ok());
        Self {
            template,
            selection_manager: SelectionManager::new(),
            viewport: Viewport::new(),
            drag: DragState::Idle,
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn into_template(self) -> Template {
        self.template
    }

    /// Replaces the edited template, dropping selection and any active drag.
    /// An invalid template is rejected and the canvas is left unchanged.
    pub fn set_template(&mut self, template: Template) -> Result<(), DesignerError> {
        template.validate()?;
        self.replace_validated(template);
        Ok(())
    }

    pub(crate) fn replace_validated(&mut self, template: Template) {
        debug_assert!(template.validate().is_ok());
        self.template = template;
        self.selection_manager.clear();
        self.drag = DragState::Idle;
    }

    /// Changes the template size; rejected if a field would fall outside.
    pub fn resize_template(&mut self, width: f64, height: f64) -> Result<(), DesignerError> {
        self.template.resize(width, height)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.reset_zoom();
    }

    /// On-screen size of the canvas at the current zoom.
    pub fn display_size(&self) -> (f64, f64) {
        self.viewport
            .display_size(self.template.width(), self.template.height())
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selection_manager.selected_id()
    }

    pub fn selected_field(&self) -> Option<&Field> {
        self.selection_manager.selected_field(&self.template)
    }

    /// Selects an existing field.
    pub fn select(&mut self, id: &str) -> Result<(), DesignerError> {
        if !self.template.contains_field(id) {
            return Err(DesignerError::unknown(id));
        }
        self.selection_manager.select(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection_manager.clear();
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Starts dragging `field_id`, given the pointer and the field's origin in
    /// screen pixels. The field becomes selected.
    pub fn begin_drag(
        &mut self,
        field_id: &str,
        pointer: ScreenPoint,
        field_screen_origin: ScreenPoint,
    ) -> Result<(), DesignerError> {
        self.select(field_id)?;
        let offset = pointer - field_screen_origin;
        debug!(
            "Drag start on '{}' with offset ({:.1}, {:.1})",
            field_id, offset.x, offset.y
        );
        self.drag = DragState::Dragging {
            field_id: field_id.to_string(),
            offset,
        };
        Ok(())
    }

    /// Moves the dragged field under the pointer and returns the committed
    /// (clamped) position. Returns `None` when no drag is active.
    pub fn drag_to(&mut self, pointer: ScreenPoint, container_origin: ScreenPoint) -> Option<Point> {
        let DragState::Dragging { field_id, offset } = &self.drag else {
            return None;
        };
        let raw = self
            .viewport
            .screen_to_template(pointer - *offset, container_origin);
        match self.template.move_field_clamped(field_id, raw) {
            Ok(position) => Some(position),
            Err(_) => {
                // Dragged field disappeared from the template.
                self.drag = DragState::Idle;
                None
            }
        }
    }

    /// Terminates any active drag and returns the id of the field that was dragged.
    pub fn end_drag(&mut self) -> Option<String> {
        match std::mem::take(&mut self.drag) {
            DragState::Dragging { field_id, .. } => {
                debug!("Drag end on '{}'", field_id);
                Some(field_id)
            }
            DragState::Idle => None,
        }
    }

    /// Drives the drag state machine with one pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> PointerOutcome {
        match event {
            PointerEvent::Down {
                pointer,
                container_origin,
            } => {
                let point = self.viewport.screen_to_template(pointer, container_origin);
                let hit = self
                    .template
                    .field_at(point)
                    .map(|f| (f.id.clone(), f.position));
                match hit {
                    Some((field_id, position)) => {
                        let origin = self.viewport.template_to_screen(position, container_origin);
                        match self.begin_drag(&field_id, pointer, origin) {
                            Ok(()) => PointerOutcome::DragStarted { field_id },
                            Err(_) => PointerOutcome::Ignored,
                        }
                    }
                    None => {
                        self.end_drag();
                        if self.selection_manager.selected_id().is_some() {
                            self.selection_manager.clear();
                            PointerOutcome::SelectionCleared
                        } else {
                            PointerOutcome::Ignored
                        }
                    }
                }
            }
            PointerEvent::Move {
                pointer,
                container_origin,
            } => {
                let Some(field_id) = self.drag.field_id().map(str::to_string) else {
                    return PointerOutcome::Ignored;
                };
                match self.drag_to(pointer, container_origin) {
                    Some(position) => PointerOutcome::Moved { field_id, position },
                    None => PointerOutcome::Ignored,
                }
            }
            PointerEvent::Up | PointerEvent::Leave => match self.end_drag() {
                Some(field_id) => PointerOutcome::DragEnded { field_id },
                None => PointerOutcome::Ignored,
            },
        }
    }

    /// Binds a catalog entry as a new field.
    pub fn bind_entry(&mut self, entry: &CatalogEntry) -> Result<&Field, DesignerError> {
        self.template.bind_entry(entry)
    }

    /// Adds a fully specified field.
    pub fn add_field(&mut self, field: Field) -> Result<&Field, DesignerError> {
        self.template.add_field(field)
    }

    /// Applies a property update through the template's validation.
    pub fn update_field(&mut self, id: &str, update: &FieldUpdate) -> Result<&Field, DesignerError> {
        self.template.apply_update(id, update)
    }

    /// Removes a field, clearing the selection and any drag that refer to it.
    pub fn remove_field(&mut self, id: &str) -> Result<Field, DesignerError> {
        let removed = self.template.remove_field(id)?;
        self.selection_manager.clear_if(id);
        if self.drag.field_id() == Some(id) {
            self.drag = DragState::Idle;
        }
        Ok(removed)
    }

    pub fn toggle_visibility(&mut self, id: &str) -> Result<bool, DesignerError> {
        self.template.toggle_visibility(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArtifactKind, FieldKind, Size};

    fn scenario_canvas() -> Canvas {
        let mut template = Template::with_id("t", "Label", 220.0, 140.0, ArtifactKind::Label);
        template
            .add_field(Field::new(
                "sku",
                FieldKind::Barcode,
                "123",
                Point::new(10.0, 70.0),
                Size::new(150.0, 30.0),
            ))
            .unwrap();
        Canvas::new(template).unwrap()
    }

    #[test]
    fn test_drag_scenario_clamps_to_bounds() {
        let mut canvas = scenario_canvas();
        canvas.set_zoom(1.5);
        let origin = ScreenPoint::new(0.0, 0.0);

        // Field origin on screen is (15, 105); pressing at (20, 110) gives offset (5, 5).
        let outcome = canvas.handle_pointer(PointerEvent::Down {
            pointer: ScreenPoint::new(20.0, 110.0),
            container_origin: origin,
        });
        assert_eq!(outcome, PointerOutcome::DragStarted { field_id: "sku".into() });
        assert_eq!(
            canvas.drag_state(),
            &DragState::Dragging {
                field_id: "sku".into(),
                offset: ScreenPoint::new(5.0, 5.0)
            }
        );
        assert_eq!(canvas.selected_id(), Some("sku"));

        let outcome = canvas.handle_pointer(PointerEvent::Move {
            pointer: ScreenPoint::new(390.0, 210.0),
            container_origin: origin,
        });
        assert_eq!(
            outcome,
            PointerOutcome::Moved {
                field_id: "sku".into(),
                position: Point::new(70.0, 110.0)
            }
        );
        assert_eq!(
            canvas.template().field("sku").map(|f| f.position),
            Some(Point::new(70.0, 110.0))
        );
    }

    #[test]
    fn test_leave_ends_drag() {
        let mut canvas = scenario_canvas();
        canvas
            .begin_drag("sku", ScreenPoint::new(15.0, 75.0), ScreenPoint::new(10.0, 70.0))
            .unwrap();
        assert!(canvas.is_dragging());
        assert_eq!(
            canvas.handle_pointer(PointerEvent::Leave),
            PointerOutcome::DragEnded { field_id: "sku".into() }
        );
        assert!(!canvas.is_dragging());

        // Moves after the drag ended do nothing.
        let before = canvas.template().clone();
        assert_eq!(
            canvas.handle_pointer(PointerEvent::Move {
                pointer: ScreenPoint::new(100.0, 100.0),
                container_origin: ScreenPoint::default(),
            }),
            PointerOutcome::Ignored
        );
        assert_eq!(canvas.template(), &before);
    }

    #[test]
    fn test_press_on_empty_canvas_clears_selection() {
        let mut canvas = scenario_canvas();
        canvas.select("sku").unwrap();
        let outcome = canvas.handle_pointer(PointerEvent::Down {
            pointer: ScreenPoint::new(200.0, 5.0),
            container_origin: ScreenPoint::default(),
        });
        assert_eq!(outcome, PointerOutcome::SelectionCleared);
        assert_eq!(canvas.selected_id(), None);
        assert!(!canvas.is_dragging());
    }

    #[test]
    fn test_remove_dragged_field_resets_state() {
        let mut canvas = scenario_canvas();
        canvas
            .begin_drag("sku", ScreenPoint::new(15.0, 75.0), ScreenPoint::new(10.0, 70.0))
            .unwrap();
        canvas.remove_field("sku").unwrap();
        assert_eq!(canvas.selected_id(), None);
        assert_eq!(canvas.drag_state(), &DragState::Idle);
    }

    #[test]
    fn test_begin_drag_unknown_field() {
        let mut canvas = scenario_canvas();
        let err = canvas.begin_drag("nope", ScreenPoint::default(), ScreenPoint::default());
        assert_eq!(err, Err(DesignerError::unknown("nope")));
        assert!(!canvas.is_dragging());
    }

    #[test]
    fn test_display_size_follows_zoom() {
        let mut canvas = scenario_canvas();
        canvas.zoom_out();
        assert_eq!(canvas.display_size(), (165.0, 105.0));
    }

    fn stray_field_template() -> Template {
        // Deserialized without validation: `sku` ends at x = 160 on a 100-wide template.
        serde_json::from_str(
            r#"{"id":"t","name":"Label","width":100.0,"height":140.0,"paperSize":"a6","orientation":"portrait",
                "fields":[{"id":"sku","name":"sku","kind":"barcode","value":"1","fontSize":12,"fontWeight":"normal",
                "position":{"x":10.0,"y":70.0},"size":{"width":150.0,"height":30.0},"visible":true}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_template() {
        assert!(matches!(
            Canvas::new(stray_field_template()),
            Err(DesignerError::OutOfBoundsField { .. })
        ));
    }

    #[test]
    fn test_set_template_rejects_invalid_template() {
        let mut canvas = scenario_canvas();
        canvas.select("sku").unwrap();
        let before = canvas.template().clone();

        assert!(canvas.set_template(stray_field_template()).is_err());
        assert_eq!(canvas.template(), &before);
        assert_eq!(canvas.selected_id(), Some("sku"));
    }

    #[test]
    fn test_resize_template_cannot_strand_fields() {
        let mut canvas = scenario_canvas();
        assert!(canvas.resize_template(100.0, 140.0).is_err());
        assert_eq!(canvas.template().width(), 220.0);
        canvas.resize_template(200.0, 120.0).unwrap();
        assert_eq!(canvas.display_size(), (200.0, 120.0));
    }
}
