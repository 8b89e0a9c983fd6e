//! Session state and the spin animation state machine.
//!
//! The machine is stepped with timestamps supplied by the caller (the wasm
//! crate feeds `requestAnimationFrame` times, tests feed synthetic clocks),
//! so the whole idle → spinning → idle cycle runs deterministically without a
//! real frame clock.

use crate::geometry::{compute_target_angle, normalize_angle, pick_index};
use crate::model::{Item, SpinResult};

/// Wall-clock length of one spin animation.
pub const DEFAULT_SPIN_DURATION_MS: f64 = 1800.0;
/// Full forward turns guaranteed before the wheel settles.
pub const EXTRA_SPINS: u32 = 3;

/// Ease-out cubic: fast start, smooth deceleration to a stop.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// What one animation step produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Tick {
    /// No spin armed; nothing to animate.
    Idle,
    /// Mid-flight; the wheel should be redrawn at the updated angle.
    Animating,
    /// The spin just finished and the selection is final.
    Settled(SpinResult),
}

#[derive(Clone, Debug)]
struct ActiveSpin {
    target_index: usize,
    start_angle: f64,
    target_angle: f64,
    duration_ms: f64,
    // Set by the first tick so the animation is immune to the gap between
    // arming the spin and the first frame callback.
    started_at_ms: Option<f64>,
}

/// The state one loaded wheel carries between events: its items, the
/// rotation angle shared by rendering and spin math, and the in-flight spin
/// if one is running.
///
/// All mutation happens on the single event thread; the armed-spin slot
/// doubles as the reentrancy guard, so a second spin request (or an item
/// reload) during a spin is ignored rather than queued.
#[derive(Clone, Debug, Default)]
pub struct WheelSession {
    items: Vec<Item>,
    rotation_angle: f64,
    spin: Option<ActiveSpin>,
}

impl WheelSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// Replace the loaded items wholesale (category change or manual
    /// refresh) and reset the rest angle. Ignored while a spin is running.
    pub fn replace_items(&mut self, items: Vec<Item>) {
        if self.is_spinning() {
            return;
        }
        self.items = items;
        self.rotation_angle = 0.0;
    }

    /// Arm a spin from a uniform `[0, 1)` random sample.
    ///
    /// Returns false, leaving everything untouched, while a spin is already
    /// running or no items are loaded; both are guarded preconditions, not
    /// errors.
    pub fn start_spin(&mut self, sample: f64, duration_ms: f64) -> bool {
        if self.is_spinning() || self.items.is_empty() {
            return false;
        }
        let n = self.items.len();
        // Re-anchor into [0, 2π) so the angle cannot drift over a long
        // session of spins.
        let start_angle = normalize_angle(self.rotation_angle);
        self.rotation_angle = start_angle;

        let target_index = pick_index(n, sample);
        let target_angle = compute_target_angle(start_angle, target_index, n, EXTRA_SPINS);
        self.spin = Some(ActiveSpin {
            target_index,
            start_angle,
            target_angle,
            duration_ms,
            started_at_ms: None,
        });
        true
    }

    /// Advance the armed spin to `now_ms`, updating the rotation angle.
    ///
    /// The first tick pins the start time. When the duration elapses the
    /// angle snaps to the exact target (no residual interpolation error) and
    /// the result is emitted exactly once.
    pub fn tick(&mut self, now_ms: f64) -> Tick {
        let Some(spin) = self.spin.as_mut() else {
            return Tick::Idle;
        };
        let started = *spin.started_at_ms.get_or_insert(now_ms);
        let duration = spin.duration_ms;
        let start_angle = spin.start_angle;
        let target_angle = spin.target_angle;
        let target_index = spin.target_index;

        let t = if duration <= 0.0 {
            1.0
        } else {
            ((now_ms - started) / duration).clamp(0.0, 1.0)
        };
        if t < 1.0 {
            let eased = ease_out_cubic(t);
            self.rotation_angle = start_angle + (target_angle - start_angle) * eased;
            return Tick::Animating;
        }

        self.rotation_angle = target_angle;
        self.spin = None;
        Tick::Settled(SpinResult {
            target_index,
            final_angle: target_angle,
        })
    }

    /// Item a completed spin selected.
    pub fn selected_item(&self, result: &SpinResult) -> Option<&Item> {
        self.items.get(result.target_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{POINTER_ANGLE, normalize_angle, slice_center_angle};

    fn menu() -> Vec<Item> {
        ["Pizza", "Tacos", "Sushi", "Salad"]
            .iter()
            .enumerate()
            .map(|(i, l)| Item::new(format!("id-{i}"), *l))
            .collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// Drive an armed spin to completion with a fixed frame cadence.
    fn run_to_settled(session: &mut WheelSession, from_ms: f64) -> SpinResult {
        let mut now = from_ms;
        loop {
            match session.tick(now) {
                Tick::Settled(result) => return result,
                Tick::Animating => now += 16.0,
                Tick::Idle => panic!("spin was not armed"),
            }
        }
    }

    #[test]
    fn easing_starts_fast_and_settles() {
        assert!(approx(ease_out_cubic(0.0), 0.0));
        assert!(approx(ease_out_cubic(1.0), 1.0));
        assert!(ease_out_cubic(0.25) > 0.25);
        // Clamped outside the unit interval.
        assert!(approx(ease_out_cubic(-2.0), 0.0));
        assert!(approx(ease_out_cubic(7.0), 1.0));
    }

    #[test]
    fn spin_lands_the_sampled_slice_under_the_pointer() {
        let mut session = WheelSession::new();
        session.replace_items(menu());

        // 0.6 * 4 slices -> index 2, "Sushi".
        assert!(session.start_spin(0.6, DEFAULT_SPIN_DURATION_MS));
        let result = run_to_settled(&mut session, 1_000.0);

        assert_eq!(result.target_index, 2);
        assert_eq!(session.selected_item(&result).unwrap().label, "Sushi");
        assert!(approx(session.rotation_angle(), result.final_angle));

        let resting = POINTER_ANGLE - slice_center_angle(2, 4);
        assert!(approx(
            normalize_angle(result.final_angle),
            normalize_angle(resting)
        ));
    }

    #[test]
    fn spin_with_no_items_is_a_no_op() {
        let mut session = WheelSession::new();
        assert!(!session.start_spin(0.5, DEFAULT_SPIN_DURATION_MS));
        assert!(!session.is_spinning());
        assert_eq!(session.tick(0.0), Tick::Idle);
        assert!(approx(session.rotation_angle(), 0.0));
    }

    #[test]
    fn second_spin_request_while_spinning_is_ignored() {
        let mut session = WheelSession::new();
        session.replace_items(menu());

        assert!(session.start_spin(0.6, DEFAULT_SPIN_DURATION_MS));
        assert!(session.is_spinning());
        // A rapid second click must neither restart nor retarget the spin.
        assert!(!session.start_spin(0.1, DEFAULT_SPIN_DURATION_MS));

        let result = run_to_settled(&mut session, 0.0);
        assert_eq!(result.target_index, 2);
        assert!(!session.is_spinning());
    }

    #[test]
    fn angle_moves_forward_monotonically_while_animating() {
        let mut session = WheelSession::new();
        session.replace_items(menu());
        assert!(session.start_spin(0.3, 1_000.0));

        let mut previous = session.rotation_angle();
        for frame in 0..=10 {
            let now = frame as f64 * 100.0;
            if let Tick::Settled(_) = session.tick(now) {
                break;
            }
            assert!(session.rotation_angle() >= previous, "frame {frame}");
            previous = session.rotation_angle();
        }
    }

    #[test]
    fn consecutive_spins_chain_without_losing_the_angle() {
        let mut session = WheelSession::new();
        session.replace_items(menu());

        assert!(session.start_spin(0.85, DEFAULT_SPIN_DURATION_MS));
        let first = run_to_settled(&mut session, 0.0);

        // The second spin starts exactly where the first one settled,
        // re-anchored into [0, 2π), and still moves strictly forward.
        assert!(session.start_spin(0.1, DEFAULT_SPIN_DURATION_MS));
        let _ = session.tick(10_000.0);
        assert!(approx(
            session.rotation_angle(),
            normalize_angle(first.final_angle)
        ));

        let second = run_to_settled(&mut session, 10_000.0);
        assert!(second.final_angle > normalize_angle(first.final_angle));
    }

    #[test]
    fn reload_during_a_spin_is_ignored() {
        let mut session = WheelSession::new();
        session.replace_items(menu());
        assert!(session.start_spin(0.0, DEFAULT_SPIN_DURATION_MS));

        session.replace_items(Vec::new());
        assert_eq!(session.items().len(), 4);

        let result = run_to_settled(&mut session, 0.0);
        assert_eq!(result.target_index, 0);

        // Idle again: the reload now takes effect.
        session.replace_items(Vec::new());
        assert!(session.items().is_empty());
        assert!(approx(session.rotation_angle(), 0.0));
    }

    #[test]
    fn zero_duration_settles_on_the_first_tick() {
        let mut session = WheelSession::new();
        session.replace_items(menu());
        assert!(session.start_spin(0.5, 0.0));
        match session.tick(42.0) {
            Tick::Settled(result) => assert_eq!(result.target_index, 2),
            other => panic!("expected an immediate settle, got {other:?}"),
        }
    }
}
