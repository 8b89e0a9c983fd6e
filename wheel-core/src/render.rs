//! Draws the whole wheel for one rotation angle.

use crate::fit::fit_label;
use crate::geometry::slice_angle;
use crate::model::Item;
use crate::palette::slice_color;
use crate::surface::{Surface, TextAlign};

/// Gap between the rim and the surface edge (px).
const OUTER_MARGIN: f64 = 6.0;
/// Radius of the hub circle drawn over the wheel center (px).
const HUB_RADIUS: f64 = 20.0;
/// Labels end this far inside the rim (px).
const LABEL_OUTER_MARGIN: f64 = 10.0;
/// Labels start this far outside the hub (px).
const LABEL_INNER_MARGIN: f64 = 30.0;
/// Even razor-thin wheels keep this much label room (px).
const MIN_LABEL_WIDTH: f64 = 20.0;
/// Half-width of the pointer base and how far its tip dips into the rim (px).
const POINTER_HALF_WIDTH: f64 = 10.0;
const POINTER_OVERHANG: f64 = 8.0;

const LABEL_FONT: &str = "bold 10px system-ui";
const LABEL_FONT_SIZE: f64 = 10.0;
const LABEL_COLOR: &str = "#ffffff";
const HUB_COLOR: &str = "#ffffff";
const POINTER_COLOR: &str = "#000000";
const PLACEHOLDER_COLOR: &str = "#999";
const PLACEHOLDER_TEXT: &str = "No items";

/// Render the wheel: one wedge and label per item, hub circle, fixed pointer.
///
/// Pure in `(items, rotation_angle)` and the surface dimensions: identical
/// arguments replay the identical draw sequence, and every call re-reads the
/// dimensions, so a resize simply re-lays-out the next frame. An empty item
/// list renders only the centered placeholder.
pub fn render<S: Surface>(surface: &mut S, items: &[Item], rotation_angle: f64) {
    let width = surface.width();
    let height = surface.height();
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = cx.min(cy) - OUTER_MARGIN;

    surface.clear();

    if items.is_empty() {
        surface.set_font(LABEL_FONT);
        surface.fill_text(PLACEHOLDER_TEXT, cx, cy, TextAlign::Center, PLACEHOLDER_COLOR);
        return;
    }

    let n = items.len();
    let slice = slice_angle(n);
    for (i, item) in items.iter().enumerate() {
        let start = rotation_angle + i as f64 * slice;
        surface.fill_wedge(cx, cy, radius, start, start + slice, &slice_color(i, n));

        // Label runs along the slice bisector, right-aligned just inside the
        // rim, in its own transform frame.
        surface.save();
        surface.translate(cx, cy);
        surface.rotate(start + slice / 2.0);
        surface.set_font(LABEL_FONT);

        let r_end = radius - LABEL_OUTER_MARGIN;
        let max_width = (r_end - (HUB_RADIUS + LABEL_INNER_MARGIN)).max(MIN_LABEL_WIDTH);
        let fitted = fit_label(&item.label, max_width, |s| surface.measure_text(s));
        // Nudged down a third of the font size to sit optically mid-slice.
        surface.fill_text(
            &fitted,
            r_end,
            LABEL_FONT_SIZE / 3.0,
            TextAlign::Right,
            LABEL_COLOR,
        );
        surface.restore();
    }

    surface.fill_circle(cx, cy, HUB_RADIUS, HUB_COLOR);

    // Fixed pointer at the top; only the wheel moves beneath it.
    let tip = (cx, cy - radius + POINTER_OVERHANG);
    let base_left = (cx - POINTER_HALF_WIDTH, cy - radius - POINTER_OVERHANG);
    let base_right = (cx + POINTER_HALF_WIDTH, cy - radius - POINTER_OVERHANG);
    surface.fill_polygon(&[tip, base_left, base_right], POINTER_COLOR);
}
