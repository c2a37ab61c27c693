use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KeyframesError {
    #[error("keyframe table is empty")]
    Empty,
    #[error("keyframe position at index {0} is not finite")]
    NonFinite(usize),
    #[error("keyframe positions must be non-decreasing (index {0})")]
    NonMonotonic(usize),
}

/// An ordered breakpoint table defining a piecewise-linear mapping.
///
/// Positions must be non-decreasing; tables that violate this are rejected at
/// construction. Sampling clamps to the boundary values outside the table,
/// and a sample landing exactly on a breakpoint returns that breakpoint's
/// value with no interpolation involved.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    points: Vec<(f64, f64)>,
}

impl Keyframes {
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self, KeyframesError> {
        validate_positions(points.iter().map(|(p, _)| *p))?;
        Ok(Self { points })
    }

    /// A table that maps every sample to the same value.
    pub fn constant(value: f64) -> Self {
        Self {
            points: vec![(0.0, value)],
        }
    }

    /// Checked construction with a silent fallback: animation tables are
    /// presentation-only, so a bad table degrades to a constant instead of
    /// failing the component.
    pub fn or_constant(points: Vec<(f64, f64)>, fallback: f64) -> Self {
        Self::new(points).unwrap_or_else(|_| Self::constant(fallback))
    }

    pub fn sample(&self, t: f64) -> f64 {
        let points = &self.points;
        let (first_pos, first_val) = points[0];
        if t <= first_pos {
            return first_val;
        }
        let (last_pos, last_val) = points[points.len() - 1];
        if t >= last_pos {
            return last_val;
        }
        for pair in points.windows(2) {
            let (p0, v0) = pair[0];
            let (p1, v1) = pair[1];
            if t == p0 {
                return v0;
            }
            if t < p1 {
                let span = p1 - p0;
                if span == 0.0 {
                    return v0;
                }
                let weight = (t - p0) / span;
                return v0 + (v1 - v0) * weight;
            }
        }
        last_val
    }
}

/// Breakpoint table for discrete outputs: the sample selects the nearest
/// breakpoint at-or-below it and holds that value until the next breakpoint
/// is crossed. Below the first breakpoint the first value applies.
#[derive(Debug, Clone, PartialEq)]
pub struct StepKeyframes<T> {
    points: Vec<(f64, T)>,
}

impl<T: Clone> StepKeyframes<T> {
    pub fn new(points: Vec<(f64, T)>) -> Result<Self, KeyframesError> {
        validate_positions(points.iter().map(|(p, _)| *p))?;
        Ok(Self { points })
    }

    /// A table that holds the same value everywhere.
    pub fn constant(value: T) -> Self {
        Self {
            points: vec![(0.0, value)],
        }
    }

    pub fn sample(&self, t: f64) -> T {
        let mut current = &self.points[0].1;
        for (pos, value) in &self.points {
            if t >= *pos {
                current = value;
            } else {
                break;
            }
        }
        current.clone()
    }
}

fn validate_positions(positions: impl Iterator<Item = f64>) -> Result<(), KeyframesError> {
    let mut prev = f64::NEG_INFINITY;
    let mut len = 0usize;
    for (i, pos) in positions.enumerate() {
        if !pos.is_finite() {
            return Err(KeyframesError::NonFinite(i));
        }
        if pos < prev {
            return Err(KeyframesError::NonMonotonic(i));
        }
        prev = pos;
        len = i + 1;
    }
    if len == 0 {
        return Err(KeyframesError::Empty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(points: &[(f64, f64)]) -> Keyframes {
        Keyframes::new(points.to_vec()).expect("test table should be valid")
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(Keyframes::new(vec![]), Err(KeyframesError::Empty));
    }

    #[test]
    fn rejects_non_monotonic_positions() {
        assert_eq!(
            Keyframes::new(vec![(0.0, 0.0), (0.5, 1.0), (0.25, 0.0)]),
            Err(KeyframesError::NonMonotonic(2))
        );
        assert_eq!(
            Keyframes::new(vec![(0.0, 0.0), (f64::NAN, 1.0)]),
            Err(KeyframesError::NonFinite(1))
        );
    }

    #[test]
    fn accepts_repeated_positions() {
        // Repeated positions model a step; sampling at the shared position
        // returns the earlier value.
        let k = table(&[(0.0, 0.0), (0.5, 1.0), (0.5, 2.0), (1.0, 3.0)]);
        assert_eq!(k.sample(0.5), 1.0);
        assert_eq!(k.sample(0.75), 2.5);
    }

    #[test]
    fn clamps_outside_the_table() {
        let k = table(&[(0.2, 5.0), (0.8, 9.0)]);
        assert_eq!(k.sample(0.0), 5.0);
        assert_eq!(k.sample(-3.0), 5.0);
        assert_eq!(k.sample(1.0), 9.0);
        assert_eq!(k.sample(42.0), 9.0);
    }

    #[test]
    fn exact_breakpoint_returns_exact_value() {
        let k = table(&[(0.0, 0.0), (0.25, 1.0), (0.75, 1.0), (1.0, 0.0)]);
        assert_eq!(k.sample(0.0), 0.0);
        assert_eq!(k.sample(0.25), 1.0);
        assert_eq!(k.sample(0.75), 1.0);
        assert_eq!(k.sample(1.0), 0.0);
    }

    #[test]
    fn interpolates_between_brackets() {
        // The scenario from the card stack: a plateau between 0.25 and 0.75,
        // ramps on both sides.
        let k = table(&[(0.0, 0.0), (0.25, 1.0), (0.75, 1.0), (1.0, 0.0)]);
        assert_eq!(k.sample(0.5), 1.0);
        let v = k.sample(0.9);
        assert!((v - 0.6).abs() < 1e-12, "expected 0.6, got {v}");
        assert_eq!(k.sample(0.125), 0.5);
    }

    #[test]
    fn output_stays_in_convex_hull() {
        let k = table(&[(0.0, 0.85), (0.3, 1.0), (0.6, 0.95), (0.9, 0.9)]);
        let mut t = -0.5;
        while t <= 1.5 {
            let v = k.sample(t);
            assert!((0.85..=1.0).contains(&v), "sample({t}) = {v} out of hull");
            t += 0.01;
        }
    }

    #[test]
    fn constant_table_ignores_the_sample() {
        let k = Keyframes::constant(0.4);
        assert_eq!(k.sample(-1.0), 0.4);
        assert_eq!(k.sample(0.0), 0.4);
        assert_eq!(k.sample(7.0), 0.4);
    }

    #[test]
    fn or_constant_falls_back_on_bad_tables() {
        let k = Keyframes::or_constant(vec![(1.0, 0.0), (0.0, 1.0)], 1.0);
        assert_eq!(k.sample(0.5), 1.0);
        let k = Keyframes::or_constant(vec![(0.0, 0.0), (1.0, 2.0)], 1.0);
        assert_eq!(k.sample(0.5), 1.0);
        assert_eq!(k.sample(1.0), 2.0);
    }

    #[test]
    fn step_table_holds_until_next_breakpoint() {
        let gate = StepKeyframes::new(vec![(0.2, "none"), (0.4, "auto"), (0.401, "none")])
            .expect("test table should be valid");
        assert_eq!(gate.sample(0.0), "none");
        assert_eq!(gate.sample(0.2), "none");
        assert_eq!(gate.sample(0.3999), "none");
        assert_eq!(gate.sample(0.4), "auto");
        assert_eq!(gate.sample(0.4005), "none");
        assert_eq!(gate.sample(1.0), "none");
    }
}
