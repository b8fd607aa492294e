use crate::config::BehaviorConfig;

pub const TAP_MAX_DURATION_MS: f64 = 500.0;
pub const TAP_SCROLL_SLOP: f64 = 10.0;

/// Enter and Space activate a focused card or grid item.
pub fn activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    Tap,
    Scroll,
    LongPress,
    /// Touch-end without a matching touch-start.
    Idle,
}

impl TapOutcome {
    pub fn activates(self) -> bool {
        self == TapOutcome::Tap
    }
}

/// Tap-vs-scroll disambiguation for one card.
#[derive(Clone, Copy, Debug)]
pub struct TapGesture {
    start_y: f64,
    start_ms: f64,
    scrolling: bool,
    active: bool,
    slop: f64,
    max_duration_ms: f64,
}

impl Default for TapGesture {
    fn default() -> Self {
        Self::new(TAP_SCROLL_SLOP, TAP_MAX_DURATION_MS)
    }
}

impl TapGesture {
    pub fn new(slop: f64, max_duration_ms: f64) -> Self {
        Self {
            start_y: 0.0,
            start_ms: 0.0,
            scrolling: false,
            active: false,
            slop,
            max_duration_ms,
        }
    }

    pub fn from_config(config: &BehaviorConfig) -> Self {
        Self::new(config.scroll_slop, config.tap_max_duration_ms)
    }

    pub fn start(&mut self, y: f64, now_ms: f64) {
        self.start_y = y;
        self.start_ms = now_ms;
        self.scrolling = false;
        self.active = true;
    }

    pub fn moved(&mut self, y: f64) {
        if !self.active || self.scrolling {
            return;
        }
        if (y - self.start_y).abs() > self.slop {
            self.scrolling = true;
        }
    }

    pub fn end(&mut self, now_ms: f64) -> TapOutcome {
        if !self.active {
            return TapOutcome::Idle;
        }
        self.active = false;
        if self.scrolling {
            return TapOutcome::Scroll;
        }
        let elapsed = (now_ms - self.start_ms).max(0.0);
        if elapsed < self.max_duration_ms {
            TapOutcome::Tap
        } else {
            TapOutcome::LongPress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_touch_without_move_is_a_tap() {
        let mut gesture = TapGesture::default();
        gesture.start(100.0, 0.0);
        assert_eq!(gesture.end(200.0), TapOutcome::Tap);
    }

    #[test]
    fn vertical_move_past_slop_is_a_scroll() {
        let mut gesture = TapGesture::default();
        gesture.start(100.0, 0.0);
        gesture.moved(130.0);
        assert_eq!(gesture.end(200.0), TapOutcome::Scroll);
    }

    #[test]
    fn scrolling_latches_until_next_start() {
        let mut gesture = TapGesture::default();
        gesture.start(100.0, 0.0);
        gesture.moved(80.0);
        gesture.moved(100.0);
        assert_eq!(gesture.end(50.0), TapOutcome::Scroll);
        gesture.start(300.0, 1000.0);
        gesture.moved(305.0);
        assert_eq!(gesture.end(1100.0), TapOutcome::Tap);
    }

    #[test]
    fn slop_is_exclusive() {
        let mut gesture = TapGesture::default();
        gesture.start(100.0, 0.0);
        gesture.moved(110.0);
        assert_eq!(gesture.end(10.0), TapOutcome::Tap);
    }

    #[test]
    fn long_press_does_not_activate() {
        let mut gesture = TapGesture::default();
        gesture.start(100.0, 0.0);
        let outcome = gesture.end(500.0);
        assert_eq!(outcome, TapOutcome::LongPress);
        assert!(!outcome.activates());
    }

    #[test]
    fn end_without_start_is_idle() {
        let mut gesture = TapGesture::default();
        assert_eq!(gesture.end(10.0), TapOutcome::Idle);
        gesture.start(0.0, 0.0);
        gesture.end(10.0);
        assert_eq!(gesture.end(20.0), TapOutcome::Idle);
    }

    #[test]
    fn activation_keys() {
        assert!(activation_key("Enter"));
        assert!(activation_key(" "));
        assert!(!activation_key("Tab"));
        assert!(!activation_key("ArrowRight"));
    }
}
