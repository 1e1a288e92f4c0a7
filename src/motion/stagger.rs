/// Delay schedule for a group of sibling reveals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerTiming {
    /// Seconds before the first item starts, counted from the group trigger.
    pub group_delay: f64,
    /// Seconds between successive items.
    pub item_delay: f64,
}

impl StaggerTiming {
    pub const fn new(group_delay: f64, item_delay: f64) -> Self {
        Self {
            group_delay,
            item_delay,
        }
    }

    /// Effective delay of item `index`, counted from the group trigger.
    pub fn delay_for(&self, index: usize) -> f64 {
        self.group_delay + index as f64 * self.item_delay
    }
}

/// Cadence presets for staggered groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaggerSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl StaggerSpeed {
    pub const fn timing(self) -> StaggerTiming {
        match self {
            StaggerSpeed::Slow => StaggerTiming::new(0.2, 0.2),
            StaggerSpeed::Normal => StaggerTiming::new(0.1, 0.1),
            StaggerSpeed::Fast => StaggerTiming::new(0.05, 0.05),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Animating,
    Settled,
}

/// Lifecycle of one reveal unit: `Hidden → Animating → Settled`, driven by a
/// visibility trigger. With `trigger_once` the settled state is terminal;
/// otherwise leaving the viewport returns the unit to `Hidden` and it replays
/// on re-entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    phase: RevealPhase,
    trigger_once: bool,
}

impl RevealState {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            phase: RevealPhase::Hidden,
            trigger_once,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Whether the unit should currently render its visible style state.
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, RevealPhase::Animating | RevealPhase::Settled)
    }

    /// Feed the visibility trigger.
    pub fn set_in_view(&mut self, in_view: bool) {
        match (self.phase, in_view) {
            (RevealPhase::Hidden, true) => self.phase = RevealPhase::Animating,
            (RevealPhase::Animating | RevealPhase::Settled, false) if !self.trigger_once => {
                self.phase = RevealPhase::Hidden
            }
            _ => {}
        }
    }

    /// The entrance transition finished.
    pub fn finish(&mut self) {
        if self.phase == RevealPhase::Animating {
            self.phase = RevealPhase::Settled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_schedule() {
        let timing = StaggerTiming::new(0.1, 0.1);
        for k in 0..5 {
            let expected = 0.1 + k as f64 * 0.1;
            assert!((timing.delay_for(k) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_delay_without_group_offset() {
        let timing = StaggerTiming::new(0.0, 0.25);
        assert_eq!(timing.delay_for(0), 0.0);
        assert_eq!(timing.delay_for(3), 0.75);
    }

    #[test]
    fn test_speed_presets() {
        assert_eq!(StaggerSpeed::Slow.timing().item_delay, 0.2);
        assert_eq!(StaggerSpeed::Normal.timing().item_delay, 0.1);
        assert_eq!(StaggerSpeed::Fast.timing().item_delay, 0.05);
    }

    #[test]
    fn test_reveal_lifecycle() {
        let mut state = RevealState::new(false);
        assert_eq!(state.phase(), RevealPhase::Hidden);
        assert!(!state.is_visible());

        state.set_in_view(true);
        assert_eq!(state.phase(), RevealPhase::Animating);
        assert!(state.is_visible());

        state.finish();
        assert_eq!(state.phase(), RevealPhase::Settled);
        assert!(state.is_visible());
    }

    #[test]
    fn test_replay_on_reentry() {
        let mut state = RevealState::new(false);
        state.set_in_view(true);
        state.finish();

        // scrolls out of view, then back in
        state.set_in_view(false);
        assert_eq!(state.phase(), RevealPhase::Hidden);
        state.set_in_view(true);
        assert_eq!(state.phase(), RevealPhase::Animating);
    }

    #[test]
    fn test_trigger_once_is_terminal() {
        let mut state = RevealState::new(true);
        state.set_in_view(true);
        state.finish();

        state.set_in_view(false);
        assert_eq!(state.phase(), RevealPhase::Settled);
        state.set_in_view(true);
        assert_eq!(state.phase(), RevealPhase::Settled);
    }

    #[test]
    fn test_mid_animation_exit_hides() {
        let mut state = RevealState::new(false);
        state.set_in_view(true);
        assert_eq!(state.phase(), RevealPhase::Animating);
        state.set_in_view(false);
        assert_eq!(state.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn test_finish_only_applies_while_animating() {
        let mut state = RevealState::new(false);
        state.finish();
        assert_eq!(state.phase(), RevealPhase::Hidden);
    }
}
