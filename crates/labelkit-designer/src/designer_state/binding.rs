//! Catalog binding operations for DesignerState.

use super::DesignerState;
use crate::catalog::{CatalogEntry, FilteredCategory};
use crate::model::Field;
use labelkit_core::DesignerError;
use std::collections::BTreeSet;
use tracing::debug;

impl DesignerState {
    /// Binds a catalog entry as a new field. Rejects ids already on the template.
    pub fn on_add_field(&mut self, entry: &CatalogEntry) -> Result<&Field, DesignerError> {
        let field = self.canvas.bind_entry(entry)?;
        self.is_modified = true;
        Ok(field)
    }

    /// Removes a field. Returns `Ok(false)` when the id is not on the template.
    pub fn on_remove_field(&mut self, id: &str) -> Result<bool, DesignerError> {
        match self.canvas.remove_field(id) {
            Ok(_) => {
                self.is_modified = true;
                Ok(true)
            }
            Err(DesignerError::UnknownFieldId { .. }) => {
                debug!("Ignoring removal of unbound field '{}'", id);
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Ids currently bound, computed from the template's fields.
    pub fn bound_ids(&self) -> BTreeSet<&str> {
        self.template().bound_ids()
    }

    pub fn is_bound(&self, entry: &CatalogEntry) -> bool {
        entry.is_bound(self.template())
    }

    /// Catalog categories matching the current search query.
    pub fn filtered_catalog(&self) -> Vec<FilteredCategory<'_>> {
        self.catalog.filter(&self.search_query)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn toggle_category(&mut self, category: &str) -> bool {
        self.catalog_view.toggle(category)
    }
}
