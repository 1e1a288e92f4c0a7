/// Longest frame gap the integrator will accept, in seconds. Browsers stop
/// delivering animation frames to background tabs; the first frame after a
/// tab switch reports a huge delta which would otherwise fling the spring.
const MAX_FRAME_DT: f64 = 0.064;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Position-to-target distance below which the spring may settle.
    pub rest_delta: f64,
    /// Velocity magnitude below which the spring may settle.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.001,
        }
    }
}

impl SpringConfig {
    /// Smoothing applied to scroll progress before it drives depth scenes.
    pub const fn scroll() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 0.5,
            rest_delta: 0.001,
            rest_speed: 0.001,
        }
    }

    /// Snappier relaxation for pointer-attraction offsets.
    pub const fn magnetic() -> Self {
        Self {
            stiffness: 150.0,
            damping: 20.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

/// Damped harmonic oscillator tracking a movable target.
///
/// State advances once per animation frame via [`Spring::step`]; once the
/// position is within `rest_delta` of the target and the velocity is below
/// `rest_speed`, the spring snaps exactly onto the target and reports settled
/// so consumers can stop re-rendering.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    /// A spring at rest on `initial`.
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target: initial,
            config,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.position).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Advance by `dt` seconds (clamped to [`MAX_FRAME_DT`]) and return the
    /// new position. Stepping a settled spring is a no-op.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return self.position;
        }
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        let displacement = self.position - self.target;
        let accel =
            (-self.config.stiffness * displacement - self.config.damping * self.velocity)
                / self.config.mass;
        // semi-implicit Euler: velocity first, then position
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn test_converges_to_constant_target() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        spring.set_target(1.0);
        for _ in 0..600 {
            spring.step(FRAME);
            if spring.is_settled() {
                break;
            }
        }
        assert!(spring.is_settled());
        assert_eq!(spring.position(), 1.0);
    }

    #[test]
    fn test_moves_toward_target_each_frame() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        spring.set_target(1.0);
        let first = spring.step(FRAME);
        let second = spring.step(FRAME);
        assert!(first > 0.0);
        assert!(second > first);
        assert!(second < 1.0);
    }

    #[test]
    fn test_settled_spring_step_is_noop() {
        let mut spring = Spring::new(0.5, SpringConfig::default());
        assert!(spring.is_settled());
        assert_eq!(spring.step(FRAME), 0.5);
        assert_eq!(spring.position(), 0.5);
    }

    #[test]
    fn test_retargeting_unsettles() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        assert!(spring.is_settled());
        spring.set_target(10.0);
        assert!(!spring.is_settled());
        spring.step(FRAME);
        assert!(spring.position() > 0.0);
    }

    #[test]
    fn test_huge_frame_gap_stays_finite() {
        let mut spring = Spring::new(0.0, SpringConfig::magnetic());
        spring.set_target(1.0);
        // a five second gap, as after a background tab wakes up
        let pos = spring.step(5.0);
        assert!(pos.is_finite());
        assert!(pos.abs() < 10.0);
        for _ in 0..600 {
            spring.step(FRAME);
        }
        assert!(spring.is_settled());
    }

    #[test]
    fn test_scroll_preset_converges() {
        let mut spring = Spring::new(0.0, SpringConfig::scroll());
        spring.set_target(0.7);
        for _ in 0..600 {
            spring.step(FRAME);
        }
        assert!(spring.is_settled());
        assert_eq!(spring.position(), 0.7);
    }
}
