pub mod colors;
pub mod label;

use compact_str::CompactString;
use rand::Rng;
use serde::Serialize;

use crate::error::{InvalidInput, Result};
use crate::layout::{self, Canvas, Rect};
use crate::profile::WeightedItem;
use colors::{Color, ColorGenerator};

/// One filled, labeled rectangle for an external renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawCommand {
    pub name: CompactString,
    pub rect: Rect,
    pub color: Color,
}

/// Zip items, rects and colors into draw commands, keeping item order.
pub fn assemble(
    items: &[WeightedItem],
    rects: &[Rect],
    colors: &[Color],
) -> Result<Vec<DrawCommand>> {
    if rects.len() != items.len() {
        return Err(InvalidInput::LengthMismatch {
            what: "rects",
            expected: items.len(),
            actual: rects.len(),
        }
        .into());
    }
    if colors.len() != items.len() {
        return Err(InvalidInput::LengthMismatch {
            what: "colors",
            expected: items.len(),
            actual: colors.len(),
        }
        .into());
    }

    Ok(items
        .iter()
        .zip(rects)
        .zip(colors)
        .map(|((item, &rect), &color)| DrawCommand {
            name: item.name.clone(),
            rect,
            color,
        })
        .collect())
}

/// Full pipeline: normalize, tile, color and pair up `items` on `canvas`.
///
/// Items are expected sorted by weight, largest first.
pub fn build_draw_commands<R: Rng>(
    items: &[WeightedItem],
    canvas: Canvas,
    generator: &ColorGenerator,
    rng: &mut R,
) -> Result<Vec<DrawCommand>> {
    let weights: Vec<f64> = items.iter().map(|item| item.weight).collect();
    if weights.windows(2).any(|w| w[0] < w[1]) {
        tracing::warn!("Items are not sorted by descending weight, layout quality may suffer");
    }

    let rects = layout::compute_layout(&weights, canvas)?;

    let mut colors = Vec::with_capacity(items.len());
    for _ in items {
        let color = generator.next(&colors, rng);
        colors.push(color);
    }

    tracing::info!(
        "Built {} draw commands for {:.0}x{:.0} canvas",
        items.len(),
        canvas.width,
        canvas.height
    );

    assemble(items, &rects, &colors)
}
