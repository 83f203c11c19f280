use crate::model::{Field, Template};

/// Manages field selection state.
///
/// At most one field is selected at a time. The manager stores only the id;
/// the field itself is looked up in the template on demand, so a removed
/// field can never stay "selected" through a dangling reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    /// The ID of the selected field, if any
    selected_id: Option<String>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use labelkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the selected field.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }

    /// Selects `id`, replacing any previous selection.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected_id = Some(id.into());
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// Clears the selection if it refers to `id`. Returns true if it did.
    pub fn clear_if(&mut self, id: &str) -> bool {
        if self.is_selected(id) {
            self.selected_id = None;
            true
        } else {
            false
        }
    }

    /// Resolves the selected field against a template.
    pub fn selected_field<'a>(&self, template: &'a Template) -> Option<&'a Field> {
        self.selected_id.as_deref().and_then(|id| template.field(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_selection() {
        let mut manager = SelectionManager::new();
        manager.select("a");
        manager.select("b");
        assert_eq!(manager.selected_id(), Some("b"));
        assert!(!manager.is_selected("a"));
    }

    #[test]
    fn test_clear_if() {
        let mut manager = SelectionManager::new();
        manager.select("a");
        assert!(!manager.clear_if("b"));
        assert_eq!(manager.selected_id(), Some("a"));
        assert!(manager.clear_if("a"));
        assert_eq!(manager.selected_id(), None);
    }
}
