//! # Data Catalog
//!
//! The categorized set of data points an operator may bind into a template.
//! Entries are candidates only; binding one produces a [`Field`] on the
//! template, and whether an entry is bound is always computed from the
//! template's field list.
//!
//! [`Field`]: crate::model::Field

use crate::model::{FieldKind, Template};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A bindable data point that has not been placed yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }

    /// Case-insensitive substring match on label or id.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.label.to_lowercase().contains(needle_lower)
            || self.id.to_lowercase().contains(needle_lower)
    }

    /// True if this entry is already placed on the template.
    pub fn is_bound(&self, template: &Template) -> bool {
        template.contains_field(&self.id)
    }
}

/// Named, ordered group of catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub entries: Vec<CatalogEntry>,
}

impl Category {
    pub fn new(name: impl Into<String>, entries: Vec<CatalogEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }
}

/// A category as seen through a search filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredCategory<'a> {
    pub name: &'a str,
    pub entries: Vec<&'a CatalogEntry>,
}

/// Static list of categories supplied by the business-data module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Finds an entry by id in any category.
    pub fn entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter())
            .find(|e| e.id == id)
    }

    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// Filters entries by a case-insensitive substring of label or id.
    /// Categories left with no matching entries are dropped. An empty
    /// query returns every category unchanged.
    pub fn filter(&self, query: &str) -> Vec<FilteredCategory<'_>> {
        let needle = query.trim().to_lowercase();
        self.categories
            .iter()
            .filter_map(|category| {
                let entries: Vec<_> = category
                    .entries
                    .iter()
                    .filter(|e| needle.is_empty() || e.matches(&needle))
                    .collect();
                if entries.is_empty() {
                    None
                } else {
                    Some(FilteredCategory {
                        name: &category.name,
                        entries,
                    })
                }
            })
            .collect()
    }

    /// Seeded perishable-goods catalog.
    pub fn default_catalog() -> Self {
        use FieldKind::*;
        Self::new(vec![
            Category::new(
                "Product",
                vec![
                    CatalogEntry::new("product_name", "Product Name", Text),
                    CatalogEntry::new("sku", "SKU", Barcode),
                    CatalogEntry::new("price", "Price", Text),
                    CatalogEntry::new("weight", "Net Weight", Number),
                    CatalogEntry::new("expiry_date", "Expiry Date", Date),
                    CatalogEntry::new("batch_code", "Batch QR", QrCode),
                    CatalogEntry::new("product_image", "Product Image", Image),
                ],
            ),
            Category::new(
                "Order",
                vec![
                    CatalogEntry::new("order_id", "Order Number", Barcode),
                    CatalogEntry::new("order_date", "Order Date", Date),
                    CatalogEntry::new("item_count", "Item Count", Number),
                    CatalogEntry::new("order_total", "Order Total", Number),
                ],
            ),
            Category::new(
                "Customer",
                vec![
                    CatalogEntry::new("customer_name", "Customer Name", Text),
                    CatalogEntry::new("delivery_address", "Delivery Address", Text),
                    CatalogEntry::new("customer_phone", "Phone", Text),
                ],
            ),
            Category::new(
                "Delivery",
                vec![
                    CatalogEntry::new("delivery_date", "Delivery Date", Date),
                    CatalogEntry::new("route", "Route", Text),
                    CatalogEntry::new("temperature_zone", "Temperature Zone", Text),
                    CatalogEntry::new("tracking_code", "Tracking QR", QrCode),
                ],
            ),
        ])
    }
}

/// Expand/collapse state of the catalog panel. Categories toggle
/// independently; any number may be expanded at once.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    expanded: HashSet<String>,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, category: &str) -> bool {
        self.expanded.contains(category)
    }

    pub fn expand(&mut self, category: &str) {
        self.expanded.insert(category.to_string());
    }

    pub fn collapse(&mut self, category: &str) {
        self.expanded.remove(category);
    }

    /// Toggles a category and returns whether it is now expanded.
    pub fn toggle(&mut self, category: &str) -> bool {
        if self.expanded.remove(category) {
            false
        } else {
            self.expanded.insert(category.to_string());
            true
        }
    }

    pub fn expand_all(&mut self, catalog: &Catalog) {
        for category in &catalog.categories {
            self.expand(&category.name);
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}
