use leptos::prelude::*;
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

/// Damped-spring parameters. The defaults match the profile card's pointer
/// smoothing (stiffness 150, damping 25, unit mass).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 150.0,
            damping: 25.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpringState {
    pub position: f64,
    pub velocity: f64,
}

impl SpringState {
    pub fn at(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }

    /// One semi-implicit Euler step towards `target`. Steps longer than 64ms
    /// (tab switched away, first frame after mount) are clamped so the
    /// integration cannot blow up.
    pub fn step(&mut self, target: f64, config: SpringConfig, dt: f64) {
        let dt = dt.clamp(0.0, 0.064);
        let accel = -config.stiffness * (self.position - target) - config.damping * self.velocity;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
    }

    pub fn settled(&self, target: f64) -> bool {
        (self.position - target).abs() < 1e-3 && self.velocity.abs() < 1e-3
    }
}

/// Follows `target` with a damped spring, advanced once per animation frame.
/// Once settled the signal snaps to the target and stops emitting updates
/// until the target moves again.
pub fn use_spring(target: Signal<f64>, config: SpringConfig) -> Signal<f64> {
    let initial = target.try_get_untracked().unwrap_or_default();
    let (value, set_value) = signal(initial);
    let state = StoredValue::new(SpringState::at(initial));

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let goal = target.get_untracked();
        let mut spring = state.get_value();
        if spring.settled(goal) {
            if value.get_untracked() != goal {
                state.set_value(SpringState::at(goal));
                set_value.set(goal);
            }
            return;
        }
        spring.step(goal, config, args.delta / 1000.0);
        state.set_value(spring);
        set_value.set(spring.position);
    });

    value.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run(mut spring: SpringState, target: f64, frames: usize) -> SpringState {
        let config = SpringConfig::default();
        for _ in 0..frames {
            spring.step(target, config, FRAME);
        }
        spring
    }

    #[test]
    fn converges_to_the_target() {
        let spring = run(SpringState::at(0.0), 120.0, 600);
        assert!(spring.settled(120.0), "did not settle: {spring:?}");
    }

    #[test]
    fn converges_from_above_and_below() {
        assert!(run(SpringState::at(300.0), -50.0, 600).settled(-50.0));
        assert!(run(SpringState::at(-300.0), 50.0, 600).settled(50.0));
    }

    #[test]
    fn stays_finite_with_oversized_steps() {
        let mut spring = SpringState::at(0.0);
        let config = SpringConfig::default();
        for _ in 0..100 {
            // Simulates a background tab delivering multi-second deltas.
            spring.step(1.0, config, 5.0);
            assert!(spring.position.is_finite());
            assert!(spring.velocity.is_finite());
        }
    }

    #[test]
    fn settled_spring_does_not_drift() {
        let mut spring = SpringState::at(42.0);
        spring.step(42.0, SpringConfig::default(), FRAME);
        assert!(spring.settled(42.0));
        assert!((spring.position - 42.0).abs() < 1e-6);
    }
}
