//! # Default Templates
//!
//! Seeded starting layouts for each artifact kind. Every call builds a fresh
//! template, so a reset can never observe edits made through another editor.

use crate::model::{ArtifactKind, Field, FieldKind, FontWeight, Point, Size, Template};
use labelkit_core::{Orientation, PaperSize};

/// Builds the default template for `artifact`.
pub fn default_template(artifact: ArtifactKind) -> Template {
    match artifact {
        ArtifactKind::Label => product_label(),
        ArtifactKind::Slip => delivery_slip(),
        ArtifactKind::Bill => packing_bill(),
    }
}

fn seed(template: &mut Template, fields: Vec<Field>) {
    for field in fields {
        if let Err(err) = template.add_field(field) {
            // Seed layouts are static; this only triggers if one is edited badly.
            tracing::error!("Default {} template is invalid: {}", template.artifact, err);
        }
    }
}

fn product_label() -> Template {
    let mut template = Template::with_id(
        "default-label",
        "Product Label",
        220.0,
        140.0,
        ArtifactKind::Label,
    )
    .with_paper(PaperSize::Label62, Orientation::Landscape);

    seed(
        &mut template,
        vec![
            Field::new(
                "product_name",
                FieldKind::Text,
                "Organic Strawberries",
                Point::new(10.0, 8.0),
                Size::new(200.0, 20.0),
            )
            .with_name("Product Name")
            .with_font(14, FontWeight::Bold),
            Field::new(
                "weight",
                FieldKind::Number,
                "0.5 kg",
                Point::new(10.0, 32.0),
                Size::new(90.0, 16.0),
            )
            .with_name("Net Weight"),
            Field::new(
                "expiry_date",
                FieldKind::Date,
                "",
                Point::new(110.0, 32.0),
                Size::new(100.0, 16.0),
            )
            .with_name("Expiry Date"),
            Field::new(
                "price",
                FieldKind::Text,
                "€4.99",
                Point::new(10.0, 50.0),
                Size::new(90.0, 16.0),
            )
            .with_name("Price")
            .with_font(12, FontWeight::Bold),
            Field::new(
                "sku",
                FieldKind::Barcode,
                "4006381333931",
                Point::new(10.0, 70.0),
                Size::new(150.0, 30.0),
            )
            .with_name("SKU"),
            Field::new(
                "batch_code",
                FieldKind::QrCode,
                "BATCH-2026-0001",
                Point::new(170.0, 70.0),
                Size::new(40.0, 40.0),
            )
            .with_name("Batch QR"),
        ],
    );
    template
}

fn delivery_slip() -> Template {
    let mut template = Template::with_id(
        "default-slip",
        "Delivery Slip",
        300.0,
        420.0,
        ArtifactKind::Slip,
    )
    .with_paper(PaperSize::A6, Orientation::Portrait);

    seed(
        &mut template,
        vec![
            Field::new(
                "order_id",
                FieldKind::Barcode,
                "ORD-104233",
                Point::new(20.0, 20.0),
                Size::new(180.0, 40.0),
            )
            .with_name("Order Number"),
            Field::new(
                "tracking_code",
                FieldKind::QrCode,
                "https://track.example/ORD-104233",
                Point::new(220.0, 20.0),
                Size::new(60.0, 60.0),
            )
            .with_name("Tracking QR"),
            Field::new(
                "customer_name",
                FieldKind::Text,
                "Sample Customer Name",
                Point::new(20.0, 90.0),
                Size::new(260.0, 20.0),
            )
            .with_name("Customer Name")
            .with_font(14, FontWeight::Bold),
            Field::new(
                "delivery_address",
                FieldKind::Text,
                "Sample Delivery Address",
                Point::new(20.0, 114.0),
                Size::new(260.0, 20.0),
            )
            .with_name("Delivery Address"),
            Field::new(
                "delivery_date",
                FieldKind::Date,
                "",
                Point::new(20.0, 150.0),
                Size::new(120.0, 20.0),
            )
            .with_name("Delivery Date"),
            Field::new(
                "route",
                FieldKind::Text,
                "Route 7",
                Point::new(160.0, 150.0),
                Size::new(120.0, 20.0),
            )
            .with_name("Route"),
            Field::new(
                "temperature_zone",
                FieldKind::Text,
                "Chilled 0-4°C",
                Point::new(20.0, 180.0),
                Size::new(260.0, 24.0),
            )
            .with_name("Temperature Zone")
            .with_font(16, FontWeight::Bold),
        ],
    );
    template
}

fn packing_bill() -> Template {
    let mut template = Template::with_id(
        "default-bill",
        "Packing Slip",
        420.0,
        595.0,
        ArtifactKind::Bill,
    )
    .with_paper(PaperSize::A5, Orientation::Portrait);

    seed(
        &mut template,
        vec![
            Field::new(
                "order_id",
                FieldKind::Barcode,
                "ORD-104233",
                Point::new(20.0, 20.0),
                Size::new(200.0, 40.0),
            )
            .with_name("Order Number"),
            Field::new(
                "order_date",
                FieldKind::Date,
                "",
                Point::new(280.0, 20.0),
                Size::new(120.0, 20.0),
            )
            .with_name("Order Date"),
            Field::new(
                "customer_name",
                FieldKind::Text,
                "Sample Customer Name",
                Point::new(20.0, 80.0),
                Size::new(380.0, 20.0),
            )
            .with_name("Customer Name")
            .with_font(14, FontWeight::Bold),
            Field::new(
                "item_count",
                FieldKind::Number,
                "12",
                Point::new(20.0, 110.0),
                Size::new(180.0, 20.0),
            )
            .with_name("Item Count"),
            Field::new(
                "order_total",
                FieldKind::Number,
                "86.40",
                Point::new(220.0, 110.0),
                Size::new(180.0, 20.0),
            )
            .with_name("Order Total")
            .with_font(14, FontWeight::Bold),
        ],
    );
    template
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        for artifact in [ArtifactKind::Label, ArtifactKind::Slip, ArtifactKind::Bill] {
            let template = default_template(artifact);
            assert_eq!(template.artifact, artifact);
            assert!(template.field_count() > 0);
            template.validate().unwrap();
        }
    }

    #[test]
    fn test_defaults_are_independent_copies() {
        let mut first = default_template(ArtifactKind::Label);
        first.remove_field("sku").unwrap();
        let second = default_template(ArtifactKind::Label);
        assert!(second.contains_field("sku"));
        assert_ne!(first, second);
    }
}
