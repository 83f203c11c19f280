//! Property panel operations for DesignerState.

use super::DesignerState;
use crate::model::{Field, FieldUpdate, FontWeight};
use labelkit_core::DesignerError;

impl DesignerState {
    /// Applies a partial update to a field.
    pub fn on_update_field(&mut self, id: &str, update: &FieldUpdate) -> Result<&Field, DesignerError> {
        let field = self.canvas.update_field(id, update)?;
        self.is_modified = true;
        Ok(field)
    }

    fn selected_or_err(&self) -> Result<String, DesignerError> {
        self.canvas
            .selected_id()
            .map(str::to_string)
            .ok_or(DesignerError::NoSelection)
    }

    /// Applies a partial update to the selected field.
    pub fn update_selected(&mut self, update: &FieldUpdate) -> Result<&Field, DesignerError> {
        let id = self.selected_or_err()?;
        self.on_update_field(&id, update)
    }

    pub fn set_selected_value(&mut self, value: impl Into<String>) -> Result<&Field, DesignerError> {
        self.update_selected(&FieldUpdate::value(value))
    }

    pub fn set_selected_font(&mut self, font_size: u32, font_weight: FontWeight) -> Result<&Field, DesignerError> {
        self.update_selected(&FieldUpdate {
            font_size: Some(font_size),
            font_weight: Some(font_weight),
            ..Default::default()
        })
    }

    pub fn set_selected_position(&mut self, x: f64, y: f64) -> Result<&Field, DesignerError> {
        self.update_selected(&FieldUpdate::position(x, y))
    }

    pub fn set_selected_size(&mut self, width: f64, height: f64) -> Result<&Field, DesignerError> {
        self.update_selected(&FieldUpdate::size(width, height))
    }

    /// Deletes the selected field; the selection is cleared.
    pub fn delete_selected(&mut self) -> Result<Field, DesignerError> {
        let id = self.selected_or_err()?;
        let removed = self.canvas.remove_field(&id)?;
        self.is_modified = true;
        Ok(removed)
    }

    pub fn toggle_visibility(&mut self, id: &str) -> Result<bool, DesignerError> {
        let visible = self.canvas.toggle_visibility(id)?;
        self.is_modified = true;
        Ok(visible)
    }

    /// Resizes the template; rejected if a placed field would fall outside.
    pub fn resize_template(&mut self, width: f64, height: f64) -> Result<(), DesignerError> {
        self.canvas.resize_template(width, height)?;
        self.is_modified = true;
        Ok(())
    }
}
