//! Pure generators for array and circular hole layouts.

use crate::config::angle::normalize_degrees;
use crate::config::MAX_PATTERN_HOLES;
use crate::model::Hole;

/// Generate a rectangular grid of holes in row-major order.
///
/// Hole `(row, col)` sits at `origin + (col * spacing_x, row * spacing_y)`.
/// Callers are expected to reject `rows == 0`, `cols == 0` and non-positive
/// spacings before calling.
pub fn rectangular_array(
    rows: usize,
    cols: usize,
    spacing_x: f64,
    spacing_y: f64,
    origin_x: f64,
    origin_y: f64,
) -> Vec<Hole> {
    let mut holes = Vec::with_capacity(rows.saturating_mul(cols).min(MAX_PATTERN_HOLES));

    for row in 0..rows {
        for col in 0..cols {
            holes.push(Hole::at(
                origin_x + col as f64 * spacing_x,
                origin_y + row as f64 * spacing_y,
            ));
        }
    }

    renumber(&mut holes);
    holes
}

/// Generate `count` holes evenly spaced on a circle.
///
/// Hole `i` sits at `start_angle_deg + i * 360 / count` degrees, measured
/// counter-clockwise from +X. Callers are expected to reject `count < 2` and
/// non-positive radii.
pub fn circular_pattern(
    count: usize,
    radius: f64,
    center_x: f64,
    center_y: f64,
    start_angle_deg: f64,
) -> Vec<Hole> {
    if count == 0 {
        return Vec::new();
    }

    let step = 360.0 / count as f64;
    let mut holes: Vec<Hole> = (0..count)
        .map(|i| {
            let theta = normalize_degrees(start_angle_deg + i as f64 * step).to_radians();
            Hole::at(
                center_x + radius * theta.cos(),
                center_y + radius * theta.sin(),
            )
        })
        .collect();

    renumber(&mut holes);
    holes
}

/// Assign 1-based sequence numbers in slice order.
pub fn renumber(holes: &mut [Hole]) {
    for (idx, hole) in holes.iter_mut().enumerate() {
        hole.sequence_number = idx + 1;
    }
}
