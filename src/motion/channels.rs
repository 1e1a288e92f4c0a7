use super::track::{Track, TrackError};

/// One frame's worth of visual channels derived from a single progress
/// scalar. Sections sample a whole `Channels` at once so every bound style
/// property reflects the same progress snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channels {
    /// Horizontal translation in px.
    pub x: f64,
    /// Vertical translation in px.
    pub y: f64,
    /// Depth translation in px.
    pub z: f64,
    pub scale: f64,
    /// Rotation around the z axis, degrees.
    pub rotate: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub opacity: f64,
    /// Blur radius in px.
    pub blur: f64,
}

impl Default for Channels {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            scale: 1.0,
            rotate: 0.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
            opacity: 1.0,
            blur: 0.0,
        }
    }
}

impl Channels {
    /// CSS `transform` value; identity channels are omitted.
    pub fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.x != 0.0 || self.y != 0.0 || self.z != 0.0 {
            parts.push(format!(
                "translate3d({:.2}px, {:.2}px, {:.2}px)",
                self.x, self.y, self.z
            ));
        }
        if self.rotate_x != 0.0 {
            parts.push(format!("rotateX({:.2}deg)", self.rotate_x));
        }
        if self.rotate_y != 0.0 {
            parts.push(format!("rotateY({:.2}deg)", self.rotate_y));
        }
        if self.rotate != 0.0 {
            parts.push(format!("rotate({:.2}deg)", self.rotate));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({:.4})", self.scale));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    /// CSS `filter` value.
    pub fn filter(&self) -> String {
        if self.blur > 0.0 {
            format!("blur({:.2}px)", self.blur)
        } else {
            "none".to_string()
        }
    }

    /// CSS `opacity` value.
    pub fn opacity(&self) -> String {
        format!("{:.4}", self.opacity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallaxDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Raw parallax parameters before they are resolved into tracks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxConfig {
    /// Travel as a fraction of 100px over the full window.
    pub speed: f64,
    pub direction: ParallaxDirection,
    pub scale: Option<(f64, f64)>,
    pub opacity: Option<(f64, f64)>,
    pub rotate: Option<(f64, f64)>,
}

/// Named parallax looks used across the sections. Each resolves once into a
/// [`ParallaxRig`]; nothing re-derives configuration per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallaxPreset {
    /// Drifts up while fading out.
    Hero,
    /// Slow upward drift for backdrop layers.
    Background,
    /// Faster upward drift for foreground layers.
    Foreground,
    /// Downward drift that grows slightly.
    Floating,
    /// Barely-there upward drift.
    Subtle,
    /// Fades and scales in while drifting.
    Reveal,
}

impl ParallaxPreset {
    pub fn config(self) -> ParallaxConfig {
        let base = ParallaxConfig {
            speed: 0.3,
            direction: ParallaxDirection::Up,
            scale: None,
            opacity: None,
            rotate: None,
        };
        match self {
            ParallaxPreset::Hero => ParallaxConfig {
                speed: 0.5,
                opacity: Some((1.0, 0.0)),
                ..base
            },
            ParallaxPreset::Background => ParallaxConfig { speed: 0.2, ..base },
            ParallaxPreset::Foreground => ParallaxConfig { speed: 0.6, ..base },
            ParallaxPreset::Floating => ParallaxConfig {
                speed: 0.4,
                direction: ParallaxDirection::Down,
                scale: Some((1.0, 1.1)),
                ..base
            },
            ParallaxPreset::Subtle => ParallaxConfig { speed: 0.1, ..base },
            ParallaxPreset::Reveal => ParallaxConfig {
                opacity: Some((0.0, 1.0)),
                scale: Some((0.9, 1.0)),
                ..base
            },
        }
    }

    pub fn rig(self) -> ParallaxRig {
        ParallaxRig::new(self.config()).expect("preset parallax tracks are monotonic")
    }
}

/// A parallax configuration resolved into per-channel tracks.
#[derive(Debug, Clone)]
pub struct ParallaxRig {
    x: Track,
    y: Track,
    scale: Track,
    opacity: Track,
    rotate: Track,
}

impl ParallaxRig {
    pub fn new(config: ParallaxConfig) -> Result<Self, TrackError> {
        let distance = 100.0 * config.speed;
        let (x, y) = match config.direction {
            ParallaxDirection::Up => (Track::range(0.0, 0.0), Track::range(distance, -distance)),
            ParallaxDirection::Down => (Track::range(0.0, 0.0), Track::range(-distance, distance)),
            ParallaxDirection::Left => (Track::range(distance, -distance), Track::range(0.0, 0.0)),
            ParallaxDirection::Right => (Track::range(-distance, distance), Track::range(0.0, 0.0)),
        };
        let pair = |range: Option<(f64, f64)>, identity: f64| match range {
            Some((from, to)) => Track::range(from, to),
            None => Track::range(identity, identity),
        };
        Ok(Self {
            x,
            y,
            scale: pair(config.scale, 1.0),
            opacity: pair(config.opacity, 1.0),
            rotate: pair(config.rotate, 0.0),
        })
    }

    /// One consistent snapshot of every channel at `progress`.
    pub fn sample(&self, progress: f64) -> Channels {
        Channels {
            x: self.x.sample(progress),
            y: self.y.sample(progress),
            scale: self.scale.sample(progress),
            opacity: self.opacity.sample(progress),
            rotate: self.rotate.sample(progress),
            ..Channels::default()
        }
    }
}

/// Per-image rig for the depth scene: each image owns a staggered slice of
/// the section's scroll progress and emerges from far z toward the viewer,
/// sharpening and growing, then passes by and fades.
#[derive(Debug, Clone)]
pub struct DepthRig {
    window: (f64, f64),
    z: Track,
    blur: Track,
    scale: Track,
    opacity: Track,
    rotate_x: Track,
    rotate_y: Track,
    x: Track,
}

impl DepthRig {
    /// Build the rig for image `index` of `total`. `width` is the rendered
    /// image width in px; horizontal drift is a fraction of it, alternating
    /// direction per index.
    pub fn new(index: usize, total: usize, width: f64) -> Result<Self, TrackError> {
        // each image animates over a slice of 60% of the scroll, starting
        // staggered, with a long exit
        let slice = 0.6 / total as f64;
        let start = 0.08 + index as f64 * slice;
        let peak = start + slice * 0.6;
        let end = start + slice + 0.2;
        let sharpen = start + (peak - start) * 0.5;
        let drift = if index % 2 == 0 { -1.0 } else { 1.0 };
        Ok(Self {
            window: (start, end),
            z: Track::new(vec![
                (start, -1500.0),
                (peak, 0.0),
                (end, 400.0),
                (1.0, 400.0),
            ])?,
            blur: Track::new(vec![(start, 20.0), (sharpen, 4.0), (peak, 0.0), (end, 0.0)])?,
            scale: Track::new(vec![(start, 0.3), (peak, 1.0), (end, 1.5)])?,
            opacity: Track::new(vec![
                (start, 0.0),
                (start + 0.05, 1.0),
                (peak, 1.0),
                (end - 0.05, 0.8),
                (end, 0.0),
            ])?,
            rotate_x: Track::new(vec![(start, 15.0), (peak, 0.0), (end, -8.0)])?,
            rotate_y: Track::new(vec![
                (start, 20.0 * drift),
                (peak, 0.0),
                (end, -10.0 * drift),
            ])?,
            x: Track::new(vec![(start, 0.0), (end, 0.15 * width * drift)])?,
        })
    }

    /// The `[start, end]` slice of section progress this image animates over.
    pub fn window(&self) -> (f64, f64) {
        self.window
    }

    pub fn sample(&self, progress: f64) -> Channels {
        Channels {
            x: self.x.sample(progress),
            z: self.z.sample(progress),
            scale: self.scale.sample(progress),
            opacity: self.opacity.sample(progress),
            rotate_x: self.rotate_x.sample(progress),
            rotate_y: self.rotate_y.sample(progress),
            blur: self.blur.sample(progress),
            ..Channels::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_transform_skips_identity() {
        assert_eq!(Channels::default().transform(), "none");
        let c = Channels {
            y: -50.0,
            scale: 1.1,
            ..Channels::default()
        };
        assert_eq!(c.transform(), "translate3d(0.00px, -50.00px, 0.00px) scale(1.1000)");
    }

    #[test]
    fn test_channels_filter() {
        assert_eq!(Channels::default().filter(), "none");
        let c = Channels {
            blur: 4.0,
            ..Channels::default()
        };
        assert_eq!(c.filter(), "blur(4.00px)");
    }

    #[test]
    fn test_hero_preset_fades_while_rising() {
        let rig = ParallaxPreset::Hero.rig();
        let start = rig.sample(0.0);
        let end = rig.sample(1.0);
        assert_eq!(start.opacity, 1.0);
        assert_eq!(end.opacity, 0.0);
        assert_eq!(start.y, 50.0);
        assert_eq!(end.y, -50.0);
        // untouched channels stay at identity
        assert_eq!(start.scale, 1.0);
        assert_eq!(start.blur, 0.0);
    }

    #[test]
    fn test_all_presets_resolve() {
        for preset in [
            ParallaxPreset::Hero,
            ParallaxPreset::Background,
            ParallaxPreset::Foreground,
            ParallaxPreset::Floating,
            ParallaxPreset::Subtle,
            ParallaxPreset::Reveal,
        ] {
            let rig = preset.rig();
            let mid = rig.sample(0.5);
            assert!(mid.opacity >= 0.0 && mid.opacity <= 1.0);
        }
    }

    #[test]
    fn test_floating_preset_descends_and_grows() {
        let rig = ParallaxPreset::Floating.rig();
        assert_eq!(rig.sample(0.0).y, -40.0);
        assert_eq!(rig.sample(1.0).y, 40.0);
        assert!((rig.sample(1.0).scale - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_depth_rig_windows_are_staggered() {
        let total = 6;
        let mut prev_start = f64::MIN;
        for index in 0..total {
            let rig = DepthRig::new(index, total, 260.0).unwrap();
            let (start, end) = rig.window();
            assert!(start > prev_start);
            assert!(start >= 0.0 && end <= 1.0);
            prev_start = start;
        }
    }

    #[test]
    fn test_depth_rig_emergence() {
        let rig = DepthRig::new(0, 6, 260.0).unwrap();
        let (start, end) = rig.window();
        let before = rig.sample(0.0);
        assert_eq!(before.opacity, 0.0);
        assert_eq!(before.z, -1500.0);
        assert_eq!(before.blur, 20.0);

        let peak = rig.sample(start + (0.6 / 6.0) * 0.6);
        assert!((peak.opacity - 1.0).abs() < 1e-9);
        assert!(peak.z.abs() < 1e-9);
        assert!(peak.blur.abs() < 1e-9);

        let after = rig.sample(end + 0.05);
        assert_eq!(after.opacity, 0.0);
        assert_eq!(after.z, 400.0);
        assert!((after.scale - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_depth_rig_alternates_drift() {
        let even = DepthRig::new(0, 6, 200.0).unwrap();
        let odd = DepthRig::new(1, 6, 200.0).unwrap();
        assert!(even.sample(1.0).x < 0.0);
        assert!(odd.sample(1.0).x > 0.0);
        assert!(even.sample(0.0).rotate_y < 0.0);
        assert!(odd.sample(0.0).rotate_y > 0.0);
    }
}
