//! Barcode and QR artwork.
//!
//! Real symbologies are an external capability: a host that needs scannable
//! symbols supplies its own [`SymbolEncoder`]. The built-in
//! [`PlaceholderEncoder`] draws non-scannable art seeded from the field's id
//! and value, so the same field always draws the same bars and cells.

use super::text::num;
use crate::model::{Field, Rect};
use labelkit_core::constants::QR_GRID_CELLS;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::{self, Write};
use xxhash_rust::xxh3::Xxh3;

/// Draws barcode and QR symbols as SVG elements inside a given area.
pub trait SymbolEncoder: fmt::Debug + Send + Sync {
    /// SVG elements for a 1D barcode filling `area` (template space, relative
    /// to the field origin).
    fn barcode(&self, field: &Field, area: Rect) -> String;

    /// SVG elements for a 2D matrix symbol filling `area`.
    fn qrcode(&self, field: &Field, area: Rect) -> String;
}

/// Non-scannable stand-in art.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderEncoder;

/// Horizontal distance between bar starts.
const BAR_PITCH: f64 = 3.0;
const MIN_BAR_HEIGHT_RATIO: f64 = 0.6;

fn feed_str(h: &mut Xxh3, s: &str) {
    h.update(&(s.len() as u64).to_be_bytes());
    h.update(s.as_bytes());
}

/// Seed over the kind name plus the length-prefixed id and value, so the
/// art stays the same across builds and toolchains.
fn field_seed(field: &Field) -> u64 {
    let mut h = Xxh3::new();
    h.update(field.kind.as_str().as_bytes());
    feed_str(&mut h, &field.id);
    feed_str(&mut h, &field.value);
    h.digest()
}

fn seeded_rng(field: &Field) -> StdRng {
    StdRng::seed_from_u64(field_seed(field))
}

/// True for the three 7x7 finder squares and their light separators.
fn finder_cell(row: usize, col: usize, n: usize) -> Option<bool> {
    let corners = [(0, 0), (0, n - 7), (n - 7, 0)];
    for (r0, c0) in corners {
        // separator ring: one light cell around each finder
        let in_zone = row + 1 >= r0 && row <= r0 + 7 && col + 1 >= c0 && col <= c0 + 7;
        if !in_zone {
            continue;
        }
        if row < r0 || col < c0 || row > r0 + 6 || col > c0 + 6 {
            return Some(false);
        }
        let (r, c) = (row - r0, col - c0);
        let ring = r == 0 || r == 6 || c == 0 || c == 6;
        let eye = (2..=4).contains(&r) && (2..=4).contains(&c);
        return Some(ring || eye);
    }
    None
}

impl SymbolEncoder for PlaceholderEncoder {
    fn barcode(&self, field: &Field, area: Rect) -> String {
        let mut rng = seeded_rng(field);
        let count = (area.width / BAR_PITCH).floor().max(0.0) as usize;
        let mut out = String::from("<g class=\"barcode-bars\" fill=\"#000\">");
        for i in 0..count {
            let bar_width = if rng.random_bool(0.5) { 1.0 } else { 2.0 };
            let height = area.height * rng.random_range(MIN_BAR_HEIGHT_RATIO..=1.0);
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>",
                num(area.x + i as f64 * BAR_PITCH),
                num(area.y + area.height - height),
                num(bar_width),
                num(height)
            );
        }
        out.push_str("</g>");
        out
    }

    fn qrcode(&self, field: &Field, area: Rect) -> String {
        let mut rng = seeded_rng(field);
        let n = QR_GRID_CELLS;
        let side = area.width.min(area.height);
        let cell = side / n as f64;
        let mut path = String::new();
        for row in 0..n {
            for col in 0..n {
                let dark = match finder_cell(row, col, n) {
                    Some(dark) => dark,
                    None => rng.random_bool(0.5),
                };
                if dark {
                    let _ = write!(
                        path,
                        "M{} {}h{}v{}h-{}z",
                        num(area.x + col as f64 * cell),
                        num(area.y + row as f64 * cell),
                        num(cell),
                        num(cell),
                        num(cell)
                    );
                }
            }
        }
        format!(
            "<path class=\"qrcode-cells\" fill=\"#000\" shape-rendering=\"crispEdges\" d=\"{}\"/>",
            path
        )
    }
}
