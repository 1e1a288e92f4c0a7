use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    #[error("a track needs at least two breakpoints")]
    TooFewPoints,
    #[error("breakpoint inputs must be strictly increasing (violated at index {0})")]
    NonMonotonic(usize),
}

/// Values a [`Track`] can interpolate between. Multi-channel values apply the
/// same fraction to every channel.
pub trait Lerp: Copy {
    fn lerp(from: Self, to: Self, f: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(from: Self, to: Self, f: f64) -> Self {
        from + (to - from) * f
    }
}

/// Color value interpolated per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
            self.a
        )
    }
}

impl Lerp for Rgba {
    fn lerp(from: Self, to: Self, f: f64) -> Self {
        Self {
            r: f64::lerp(from.r, to.r, f),
            g: f64::lerp(from.g, to.g, f),
            b: f64::lerp(from.b, to.b, f),
            a: f64::lerp(from.a, to.a, f),
        }
    }
}

/// A piecewise-linear curve over `[0, 1]` progress.
///
/// Breakpoint inputs must be strictly increasing; construction rejects
/// anything else rather than leaving interpolation at the inversion point
/// undefined. Sampling clamps at the range edges, it never extrapolates.
#[derive(Debug, Clone, PartialEq)]
pub struct Track<T: Lerp = f64> {
    points: Vec<(f64, T)>,
}

impl<T: Lerp> Track<T> {
    pub fn new(points: Vec<(f64, T)>) -> Result<Self, TrackError> {
        if points.len() < 2 {
            return Err(TrackError::TooFewPoints);
        }
        for i in 1..points.len() {
            if points[i].0 <= points[i - 1].0 {
                return Err(TrackError::NonMonotonic(i));
            }
        }
        Ok(Self { points })
    }

    /// Evaluate the curve at `progress`. Pure function of its inputs.
    pub fn sample(&self, progress: f64) -> T {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if progress <= first.0 {
            return first.1;
        }
        if progress >= last.0 {
            return last.1;
        }
        // progress lies strictly inside the breakpoint range here, so a
        // bounding interval always exists
        let mut upper = 1;
        while self.points[upper].0 < progress {
            upper += 1;
        }
        let (i0, o0) = self.points[upper - 1];
        let (i1, o1) = self.points[upper];
        let f = (progress - i0) / (i1 - i0);
        T::lerp(o0, o1, f)
    }
}

impl Track<f64> {
    /// Two-point track from progress 0 to progress 1.
    pub fn range(from: f64, to: f64) -> Self {
        Self {
            points: vec![(0.0, from), (1.0, to)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_below_first_breakpoint() {
        let track = Track::new(vec![(0.2, 10.0), (0.8, 20.0)]).unwrap();
        assert_eq!(track.sample(0.0), 10.0);
        assert_eq!(track.sample(0.2), 10.0);
        assert_eq!(track.sample(-1.0), 10.0);
    }

    #[test]
    fn test_clamps_above_last_breakpoint() {
        let track = Track::new(vec![(0.2, 10.0), (0.8, 20.0)]).unwrap();
        assert_eq!(track.sample(0.8), 20.0);
        assert_eq!(track.sample(1.0), 20.0);
        assert_eq!(track.sample(2.0), 20.0);
    }

    #[test]
    fn test_linear_between_adjacent_breakpoints() {
        let track = Track::new(vec![(0.2, 10.0), (0.8, 20.0)]).unwrap();
        // endpoints and midpoint of the interval
        assert_eq!(track.sample(0.2), 10.0);
        assert_eq!(track.sample(0.8), 20.0);
        assert!((track.sample(0.5) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_rise_then_fall_curve() {
        // opacity curve rising then falling
        let track = Track::new(vec![(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]).unwrap();
        assert_eq!(track.sample(0.0), 0.0);
        assert!((track.sample(0.25) - 0.5).abs() < 1e-12);
        assert_eq!(track.sample(0.5), 1.0);
        assert!((track.sample(0.75) - 0.5).abs() < 1e-12);
        assert_eq!(track.sample(1.0), 0.0);
    }

    #[test]
    fn test_range_track() {
        let track = Track::range(0.0, -100.0);
        assert_eq!(track.sample(0.0), 0.0);
        assert_eq!(track.sample(0.5), -50.0);
        assert_eq!(track.sample(1.0), -100.0);
    }

    #[test]
    fn test_rejects_too_few_points() {
        assert_eq!(
            Track::new(vec![(0.0, 1.0)]).unwrap_err(),
            TrackError::TooFewPoints
        );
        assert_eq!(
            Track::<f64>::new(vec![]).unwrap_err(),
            TrackError::TooFewPoints
        );
    }

    #[test]
    fn test_rejects_non_monotonic_inputs() {
        assert_eq!(
            Track::new(vec![(0.0, 0.0), (0.5, 1.0), (0.4, 2.0)]).unwrap_err(),
            TrackError::NonMonotonic(2)
        );
        // duplicate inputs are rejected too
        assert_eq!(
            Track::new(vec![(0.0, 0.0), (0.0, 1.0)]).unwrap_err(),
            TrackError::NonMonotonic(1)
        );
    }

    #[test]
    fn test_rgba_interpolates_per_channel() {
        let track = Track::new(vec![
            (0.0, Rgba::new(0.0, 0.0, 0.0, 0.0)),
            (1.0, Rgba::new(255.0, 100.0, 50.0, 1.0)),
        ])
        .unwrap();
        let mid = track.sample(0.5);
        assert_eq!(mid, Rgba::new(127.5, 50.0, 25.0, 0.5));
        assert_eq!(track.sample(-0.5), Rgba::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(track.sample(1.5), Rgba::new(255.0, 100.0, 50.0, 1.0));
    }

    #[test]
    fn test_rgba_css() {
        assert_eq!(
            Rgba::new(225.0, 217.0, 188.0, 0.4).css(),
            "rgba(225, 217, 188, 0.4)"
        );
    }
}
