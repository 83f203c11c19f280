//! Template definition and the mutation functions that guard its invariants.
//!
//! Both the drag path and the property editor path go through this module, so
//! the containment invariant holds regardless of which one mutates a field:
//!
//! ```text
//! 0 <= x && x + width  <= template.width
//! 0 <= y && y + height <= template.height
//! ```

use super::{clamp_font_size, Field, FieldKind, FieldUpdate, Point, Size};
use crate::catalog::CatalogEntry;
use labelkit_core::constants::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use labelkit_core::{DesignerError, Orientation, PaperSize};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Kind of print artifact a template produces.
///
/// Each artifact registers the field kinds it may carry, so one template type
/// serves labels, delivery slips and packing bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Product label
    #[default]
    Label,
    /// Delivery slip
    Slip,
    /// Packing slip / bill
    Bill,
}

impl ArtifactKind {
    /// Field kinds that may be placed on this artifact.
    pub fn allowed_kinds(&self) -> &'static [FieldKind] {
        match self {
            ArtifactKind::Label => &FieldKind::ALL,
            ArtifactKind::Slip => &[
                FieldKind::Text,
                FieldKind::Barcode,
                FieldKind::QrCode,
                FieldKind::Date,
                FieldKind::Number,
            ],
            ArtifactKind::Bill => &[
                FieldKind::Text,
                FieldKind::Barcode,
                FieldKind::Date,
                FieldKind::Number,
            ],
        }
    }

    pub fn allows(&self, kind: FieldKind) -> bool {
        self.allowed_kinds().contains(&kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Label => "label",
            ArtifactKind::Slip => "slip",
            ArtifactKind::Bill => "bill",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "label" => Ok(ArtifactKind::Label),
            "slip" | "delivery-slip" => Ok(ArtifactKind::Slip),
            "bill" | "packing-slip" => Ok(ArtifactKind::Bill),
            _ => Err(format!("Unknown artifact kind: {}", s)),
        }
    }
}

/// Fixed-size canvas definition holding an ordered list of fields.
///
/// List order is paint order: later fields draw on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    width: f64,
    height: f64,
    fields: Vec<Field>,
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    #[serde(default)]
    pub artifact: ArtifactKind,
}

impl Template {
    /// Creates an empty template with a generated id.
    pub fn new(name: impl Into<String>, width: f64, height: f64, artifact: ArtifactKind) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), name, width, height, artifact)
    }

    /// Creates an empty template with an explicit id.
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        width: f64,
        height: f64,
        artifact: ArtifactKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width,
            height,
            fields: Vec::new(),
            paper_size: PaperSize::default(),
            orientation: Orientation::default(),
            artifact,
        }
    }

    pub fn with_paper(mut self, paper_size: PaperSize, orientation: Orientation) -> Self {
        self.paper_size = paper_size;
        self.orientation = orientation;
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Changes the template size. Rejected if any placed field would no longer fit.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), DesignerError> {
        check_dimensions(width, height)?;
        let previous = (self.width, self.height);
        (self.width, self.height) = (width, height);
        if let Some(err) = self.fields.iter().find_map(|f| self.check_bounds(f).err()) {
            (self.width, self.height) = previous;
            warn!("Rejected resize of '{}': {}", self.id, err);
            return Err(err);
        }
        debug!("Resized '{}' to {}x{}", self.id, width, height);
        Ok(())
    }

    /// Fields in paint order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn contains_field(&self, id: &str) -> bool {
        self.field(id).is_some()
    }

    fn index_of(&self, id: &str) -> Result<usize, DesignerError> {
        self.fields
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| DesignerError::unknown(id))
    }

    /// Ids of every field on the template. Derived on demand so it can never
    /// drift from the field list.
    pub fn bound_ids(&self) -> BTreeSet<&str> {
        self.fields.iter().map(|f| f.id.as_str()).collect()
    }

    /// Topmost field whose box contains `point`.
    pub fn field_at(&self, point: Point) -> Option<&Field> {
        self.fields.iter().rev().find(|f| f.bounds().contains(point))
    }

    /// True if a box at `position` with `size` lies inside the template.
    pub fn is_within_bounds(&self, position: Point, size: Size) -> bool {
        position.x >= 0.0
            && position.y >= 0.0
            && size.width >= 0.0
            && size.height >= 0.0
            && position.x + size.width <= self.width
            && position.y + size.height <= self.height
    }

    fn check_bounds(&self, field: &Field) -> Result<(), DesignerError> {
        if self.is_within_bounds(field.position, field.size) {
            Ok(())
        } else {
            Err(DesignerError::OutOfBoundsField {
                id: field.id.clone(),
                x: field.position.x,
                y: field.position.y,
                width: field.size.width,
                height: field.size.height,
                template_width: self.width,
                template_height: self.height,
            })
        }
    }

    /// Clamps a candidate top-left position so a box of `size` stays inside the template.
    ///
    /// A box wider or taller than the template is pinned to the origin on that axis.
    pub fn clamp_position(&self, size: Size, candidate: Point) -> Point {
        let max_x = (self.width - size.width).max(0.0);
        let max_y = (self.height - size.height).max(0.0);
        Point::new(candidate.x.clamp(0.0, max_x), candidate.y.clamp(0.0, max_y))
    }

    /// Appends a field after validating id uniqueness, kind and containment.
    /// The font size is clamped to the supported range.
    pub fn add_field(&mut self, mut field: Field) -> Result<&Field, DesignerError> {
        if self.contains_field(&field.id) {
            warn!("Rejected duplicate field id '{}'", field.id);
            return Err(DesignerError::duplicate(&field.id));
        }
        if !self.artifact.allows(field.kind) {
            warn!(
                "Rejected field '{}': kind {} not allowed on {}",
                field.id, field.kind, self.artifact
            );
            return Err(DesignerError::invalid_kind(field.kind.as_str()));
        }
        self.check_bounds(&field)?;
        field.font_size = clamp_font_size(field.font_size);
        debug!("Added field '{}' ({})", field.id, field.kind);
        let index = self.fields.len();
        self.fields.push(field);
        Ok(&self.fields[index])
    }

    /// Binds a catalog entry as a new field at the default position and size.
    ///
    /// On templates smaller than the default box, the box is shrunk to fit.
    pub fn bind_entry(&mut self, entry: &CatalogEntry) -> Result<&Field, DesignerError> {
        let mut field = Field::from_catalog(entry);
        field.size.width = field.size.width.min(self.width);
        field.size.height = field.size.height.min(self.height);
        field.position = self.clamp_position(field.size, field.position);
        self.add_field(field)
    }

    /// Removes and returns the field with `id`.
    pub fn remove_field(&mut self, id: &str) -> Result<Field, DesignerError> {
        let index = self.index_of(id)?;
        debug!("Removed field '{}'", id);
        Ok(self.fields.remove(index))
    }

    /// Applies a partial update. The field is left untouched if the result
    /// would break containment.
    pub fn apply_update(&mut self, id: &str, update: &FieldUpdate) -> Result<&Field, DesignerError> {
        let index = self.index_of(id)?;
        let next = update.applied_to(&self.fields[index]);
        if update.touches_geometry() {
            if let Err(err) = self.check_bounds(&next) {
                warn!("Rejected update to '{}': {}", id, err);
                return Err(err);
            }
        }
        self.fields[index] = next;
        Ok(&self.fields[index])
    }

    /// Moves a field to the clamped form of `candidate` and returns the committed position.
    pub fn move_field_clamped(&mut self, id: &str, candidate: Point) -> Result<Point, DesignerError> {
        let index = self.index_of(id)?;
        let position = self.clamp_position(self.fields[index].size, candidate);
        self.fields[index].position = position;
        Ok(position)
    }

    /// Flips the visibility of a field and returns the new state.
    pub fn toggle_visibility(&mut self, id: &str) -> Result<bool, DesignerError> {
        let index = self.index_of(id)?;
        let field = &mut self.fields[index];
        field.visible = !field.visible;
        Ok(field.visible)
    }

    /// Checks every invariant; used on templates that arrive from outside
    /// (deserialized by a host).
    pub fn validate(&self) -> Result<(), DesignerError> {
        check_dimensions(self.width, self.height)?;
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.id.as_str()) {
                return Err(DesignerError::duplicate(&field.id));
            }
            if !self.artifact.allows(field.kind) {
                return Err(DesignerError::invalid_kind(field.kind.as_str()));
            }
            self.check_bounds(field)?;
            if clamp_font_size(field.font_size) != field.font_size {
                return Err(DesignerError::InvalidFontSize {
                    id: field.id.clone(),
                    size: field.font_size,
                    min: MIN_FONT_SIZE,
                    max: MAX_FONT_SIZE,
                });
            }
        }
        Ok(())
    }

    /// Parses a template saved by a host and validates it.
    pub fn from_json(json: &str) -> labelkit_core::Result<Self> {
        let template: Template = serde_json::from_str(json)?;
        template.validate()?;
        Ok(template)
    }

    pub fn to_json(&self) -> labelkit_core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn check_dimensions(width: f64, height: f64) -> Result<(), DesignerError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(DesignerError::InvalidTemplateSize { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label() -> Template {
        Template::with_id("t", "Label", 220.0, 140.0, ArtifactKind::Label)
    }

    fn barcode() -> Field {
        Field::new(
            "sku",
            FieldKind::Barcode,
            "4006381333931",
            Point::new(10.0, 70.0),
            Size::new(150.0, 30.0),
        )
    }

    #[test]
    fn test_clamp_position() {
        let t = label();
        let p = t.clamp_position(Size::new(150.0, 30.0), Point::new(256.7, 136.7));
        assert_eq!(p, Point::new(70.0, 110.0));
        let p = t.clamp_position(Size::new(150.0, 30.0), Point::new(-4.0, -1.0));
        assert_eq!(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_clamp_oversized_box_pins_to_origin() {
        let t = label();
        let p = t.clamp_position(Size::new(300.0, 30.0), Point::new(50.0, 20.0));
        assert_eq!(p, Point::new(0.0, 20.0));
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut t = label();
        t.add_field(barcode()).unwrap();
        assert_eq!(t.add_field(barcode()), Err(DesignerError::duplicate("sku")));
        assert_eq!(t.field_count(), 1);
    }

    #[test]
    fn test_add_rejects_kind_not_allowed() {
        let mut t = Template::with_id("b", "Bill", 300.0, 400.0, ArtifactKind::Bill);
        let image = Field::new(
            "logo",
            FieldKind::Image,
            "",
            Point::new(0.0, 0.0),
            Size::new(50.0, 50.0),
        );
        assert_eq!(
            t.add_field(image),
            Err(DesignerError::invalid_kind("image"))
        );
        assert_eq!(t.field_count(), 0);
    }

    #[test]
    fn test_update_out_of_bounds_leaves_field_unchanged() {
        let mut t = label();
        t.add_field(barcode()).unwrap();
        let before = t.field("sku").cloned();

        let err = t.apply_update("sku", &FieldUpdate::position(100.0, 70.0));
        assert!(matches!(err, Err(DesignerError::OutOfBoundsField { .. })));
        assert_eq!(t.field("sku").cloned(), before);

        let err = t.apply_update("sku", &FieldUpdate::size(150.0, 80.0));
        assert!(matches!(err, Err(DesignerError::OutOfBoundsField { .. })));
        assert_eq!(t.field("sku").cloned(), before);
    }

    #[test]
    fn test_resize_keeps_fields_contained() {
        let mut t = label();
        t.add_field(barcode()).unwrap();

        let err = t.resize(100.0, 140.0).unwrap_err();
        assert!(matches!(err, DesignerError::OutOfBoundsField { ref id, .. } if id == "sku"));
        assert_eq!((t.width(), t.height()), (220.0, 140.0));

        t.resize(160.0, 100.0).unwrap();
        assert_eq!((t.width(), t.height()), (160.0, 100.0));
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_resize_rejects_degenerate_size() {
        let mut t = label();
        for (w, h) in [(0.0, 140.0), (220.0, -1.0), (f64::NAN, 140.0), (f64::INFINITY, 140.0)] {
            assert!(matches!(
                t.resize(w, h),
                Err(DesignerError::InvalidTemplateSize { .. })
            ));
        }
        assert_eq!((t.width(), t.height()), (220.0, 140.0));
    }

    #[test]
    fn test_add_field_clamps_font_size() {
        let mut t = label();
        let mut field = barcode();
        field.font_size = 500;
        assert_eq!(t.add_field(field).unwrap().font_size, MAX_FONT_SIZE);

        let mut tiny = Field::new("note", FieldKind::Text, "x", Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        tiny.font_size = 1;
        assert_eq!(t.add_field(tiny).unwrap().font_size, MIN_FONT_SIZE);
    }

    #[test]
    fn test_from_json_rejects_font_size_out_of_range() {
        let json = r#"{
            "id": "t", "name": "x", "width": 100.0, "height": 100.0,
            "paperSize": "a6", "orientation": "portrait",
            "fields": [
                {"id":"a","name":"a","kind":"text","value":"","fontSize":500,"fontWeight":"normal",
                 "position":{"x":0.0,"y":0.0},"size":{"width":10.0,"height":10.0},"visible":true}
            ]
        }"#;
        assert!(matches!(
            Template::from_json(json),
            Err(labelkit_core::Error::Designer(DesignerError::InvalidFontSize { size: 500, .. }))
        ));
    }

    #[test]
    fn test_from_json_rejects_field_outside_template() {
        let mut t = label();
        t.add_field(barcode()).unwrap();
        let json = t.to_json().unwrap().replace("\"width\": 220.0", "\"width\": 50.0");
        assert!(matches!(
            Template::from_json(&json),
            Err(labelkit_core::Error::Designer(DesignerError::OutOfBoundsField { .. }))
        ));
    }

    #[test]
    fn test_field_at_prefers_topmost() {
        let mut t = label();
        t.add_field(barcode()).unwrap();
        t.add_field(Field::new(
            "overlay",
            FieldKind::Text,
            "x",
            Point::new(0.0, 60.0),
            Size::new(100.0, 20.0),
        ))
        .unwrap();
        assert_eq!(t.field_at(Point::new(20.0, 75.0)).map(|f| f.id.as_str()), Some("overlay"));
        assert_eq!(t.field_at(Point::new(140.0, 90.0)).map(|f| f.id.as_str()), Some("sku"));
        assert!(t.field_at(Point::new(200.0, 5.0)).is_none());
    }

    #[test]
    fn test_remove_unknown() {
        let mut t = label();
        assert_eq!(t.remove_field("nope"), Err(DesignerError::unknown("nope")));
    }

    #[test]
    fn test_bind_entry_shrinks_to_small_template() {
        let mut t = Template::with_id("s", "Tiny", 100.0, 15.0, ArtifactKind::Label);
        let entry = CatalogEntry::new("price", "Price", FieldKind::Text);
        let field = t.bind_entry(&entry).unwrap();
        assert_eq!(field.size, Size::new(100.0, 15.0));
        assert_eq!(field.position, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_validate_catches_duplicates_from_json() {
        let json = r#"{
            "id": "t", "name": "x", "width": 100.0, "height": 100.0,
            "paperSize": "a6", "orientation": "portrait",
            "fields": [
                {"id":"a","name":"a","kind":"text","value":"","fontSize":12,"fontWeight":"normal",
                 "position":{"x":0.0,"y":0.0},"size":{"width":10.0,"height":10.0},"visible":true},
                {"id":"a","name":"a","kind":"text","value":"","fontSize":12,"fontWeight":"normal",
                 "position":{"x":0.0,"y":0.0},"size":{"width":10.0,"height":10.0},"visible":true}
            ]
        }"#;
        let t: Template = serde_json::from_str(json).unwrap();
        assert_eq!(t.artifact, ArtifactKind::Label);
        assert_eq!(t.validate(), Err(DesignerError::duplicate("a")));
    }

    #[test]
    fn test_json_roundtrip_keeps_field_order() {
        let mut t = label();
        t.add_field(Field::new("b", FieldKind::Text, "1", Point::new(0.0, 0.0), Size::new(10.0, 10.0)))
            .unwrap();
        t.add_field(Field::new("a", FieldKind::Number, "2", Point::new(5.0, 5.0), Size::new(10.0, 10.0)))
            .unwrap();
        let back = Template::from_json(&t.to_json().unwrap()).unwrap();
        assert_eq!(back, t);
        let ids: Vec<_> = back.fields().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            Template::from_json("{"),
            Err(labelkit_core::Error::Serialization(_))
        ));
    }
}
