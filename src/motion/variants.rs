/// Easing curves shared across the site. The cubic-bezier control points
/// match the curves used everywhere in the design: an expo-like ease-out for
/// cinematic moves, a quart ease-out for UI, and a slightly overshooting
/// curve for cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    OutExpo,
    OutQuart,
    OutCard,
}

impl Ease {
    pub const fn css(self) -> &'static str {
        match self {
            Ease::OutExpo => "cubic-bezier(0.16, 1, 0.3, 1)",
            Ease::OutQuart => "cubic-bezier(0.25, 1, 0.5, 1)",
            Ease::OutCard => "cubic-bezier(0.22, 1, 0.36, 1)",
        }
    }
}

/// Duration/delay/easing triple rendered to a CSS `transition` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Seconds.
    pub duration: f64,
    /// Seconds.
    pub delay: f64,
    pub ease: Ease,
}

impl Transition {
    /// Smooth cinematic default.
    pub const SMOOTH: Self = Self {
        duration: 0.8,
        delay: 0.0,
        ease: Ease::OutExpo,
    };

    /// Snappy, for UI elements.
    pub const SNAPPY: Self = Self {
        duration: 0.4,
        delay: 0.0,
        ease: Ease::OutQuart,
    };

    /// Slow reveal for dramatic moments.
    pub const SLOW: Self = Self {
        duration: 1.2,
        delay: 0.0,
        ease: Ease::OutExpo,
    };

    pub const fn lasting(self, duration: f64) -> Self {
        Self {
            duration,
            delay: self.delay,
            ease: self.ease,
        }
    }

    pub const fn delayed(self, delay: f64) -> Self {
        Self {
            duration: self.duration,
            delay,
            ease: self.ease,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "transform {dur}s {ease} {delay}s, opacity {dur}s {ease} {delay}s, \
             filter {dur}s {ease} {delay}s, clip-path {dur}s {ease} {delay}s",
            dur = self.duration,
            ease = self.ease.css(),
            delay = self.delay,
        )
    }
}

/// The style properties a reveal toggles between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleState {
    pub transform: &'static str,
    pub opacity: f64,
    pub filter: &'static str,
    pub clip_path: &'static str,
}

impl StyleState {
    const VISIBLE: Self = Self {
        transform: "none",
        opacity: 1.0,
        filter: "none",
        clip_path: "none",
    };

    const fn hidden(transform: &'static str) -> Self {
        Self {
            transform,
            opacity: 0.0,
            filter: "none",
            clip_path: "none",
        }
    }
}

/// Hidden/visible pair for a reveal variant, resolved once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantSpec {
    pub hidden: StyleState,
    pub visible: StyleState,
}

/// Entrance animation presets. An enum rather than a string-keyed map so an
/// unknown variant cannot exist and the lookup costs nothing per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealVariant {
    #[default]
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    Scale,
    Blur,
    ClipReveal,
}

impl RevealVariant {
    pub const fn spec(self) -> VariantSpec {
        let hidden = match self {
            RevealVariant::FadeUp => StyleState::hidden("translate3d(0, 60px, 0)"),
            RevealVariant::FadeDown => StyleState::hidden("translate3d(0, -60px, 0)"),
            RevealVariant::FadeLeft => StyleState::hidden("translate3d(-60px, 0, 0)"),
            RevealVariant::FadeRight => StyleState::hidden("translate3d(60px, 0, 0)"),
            RevealVariant::Scale => StyleState::hidden("scale(0.9)"),
            RevealVariant::Blur => StyleState {
                transform: "translate3d(0, 30px, 0)",
                opacity: 0.0,
                filter: "blur(10px)",
                clip_path: "none",
            },
            RevealVariant::ClipReveal => StyleState {
                transform: "none",
                opacity: 1.0,
                filter: "none",
                clip_path: "inset(100% 0% 0% 0%)",
            },
        };
        VariantSpec {
            hidden,
            visible: StyleState::VISIBLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_css() {
        let css = Transition::SMOOTH.delayed(0.2).css();
        assert!(css.contains("transform 0.8s cubic-bezier(0.16, 1, 0.3, 1) 0.2s"));
        assert!(css.contains("opacity 0.8s"));
        assert!(css.contains("clip-path 0.8s"));
    }

    #[test]
    fn test_builders_keep_other_fields() {
        let t = Transition::SNAPPY.lasting(0.6).delayed(0.1);
        assert_eq!(t.duration, 0.6);
        assert_eq!(t.delay, 0.1);
        assert_eq!(t.ease, Ease::OutQuart);
    }

    #[test]
    fn test_fade_variants_hide_with_offset() {
        let spec = RevealVariant::FadeUp.spec();
        assert_eq!(spec.hidden.opacity, 0.0);
        assert_eq!(spec.hidden.transform, "translate3d(0, 60px, 0)");
        assert_eq!(spec.visible, StyleState::VISIBLE);

        assert_eq!(
            RevealVariant::FadeLeft.spec().hidden.transform,
            "translate3d(-60px, 0, 0)"
        );
    }

    #[test]
    fn test_clip_reveal_keeps_opacity() {
        let spec = RevealVariant::ClipReveal.spec();
        assert_eq!(spec.hidden.opacity, 1.0);
        assert_eq!(spec.hidden.clip_path, "inset(100% 0% 0% 0%)");
        assert_eq!(spec.visible.clip_path, "none");
    }

    #[test]
    fn test_blur_variant() {
        let spec = RevealVariant::Blur.spec();
        assert_eq!(spec.hidden.filter, "blur(10px)");
        assert_eq!(spec.visible.filter, "none");
    }
}
