//! Angle math for the wheel.
//!
//! All angles are radians in canvas coordinates: 0 points along the positive
//! x-axis and positive angles turn clockwise. The wheel rotation and the
//! pointer position share this frame, so the spin target can be computed with
//! plain modular arithmetic.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Screen angle of the fixed selection pointer: straight up.
pub const POINTER_ANGLE: f64 = -FRAC_PI_2;

/// Angular span of one slice on a wheel of `n` items.
///
/// Callers must check for an empty wheel first; `n == 0` has no slice
/// geometry at all.
pub fn slice_angle(n: usize) -> f64 {
    assert!(n > 0, "slice_angle of an empty wheel");
    TAU / n as f64
}

/// Angle of the center of slice `i`, before the wheel rotation is applied.
pub fn slice_center_angle(i: usize, n: usize) -> f64 {
    i as f64 * slice_angle(n) + slice_angle(n) / 2.0
}

/// Normalize an angle into `[0, 2π)`.
///
/// Repeated spins only ever add forward turns, so the stored rotation is
/// re-anchored through this before each spin to keep the float from growing
/// without bound over a long session.
pub fn normalize_angle(a: f64) -> f64 {
    a.rem_euclid(TAU)
}

/// Map a uniform sample in `[0, 1)` to a slice index in `[0, n)`.
///
/// Each slice gets an equal share of the sample space, so a uniform random
/// source yields a uniform selection. The result is clamped so a sample of
/// exactly 1.0 cannot escape the range.
pub fn pick_index(n: usize, sample: f64) -> usize {
    assert!(n > 0, "pick_index on an empty wheel");
    let i = (sample.clamp(0.0, 1.0) * n as f64) as usize;
    i.min(n - 1)
}

/// Rotation angle that parks the center of slice `target_index` under the
/// pointer.
///
/// Returns the smallest angle that is congruent (mod 2π) to
/// `POINTER_ANGLE - slice_center_angle(target_index, n)` while still clearing
/// `extra_spins` full forward turns from `current`. The result is strictly
/// greater than `current` for any finite input, so the animation never runs
/// backwards no matter where the wheel rests.
pub fn compute_target_angle(current: f64, target_index: usize, n: usize, extra_spins: u32) -> f64 {
    assert!(target_index < n, "target slice out of range");
    let base = POINTER_ANGLE - slice_center_angle(target_index, n);
    let min_target = current + extra_spins.max(1) as f64 * TAU;
    let turns = ((min_target - base) / TAU).ceil();
    base + turns * TAU
}
