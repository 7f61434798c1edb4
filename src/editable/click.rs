//! Multi-click detection for double/triple click selection.

/// Default double-click window, in frames (~300ms at 60fps)
pub const DEFAULT_DOUBLE_CLICK_FRAMES: u64 = 18;

/// What a pointer press means once its timing has been classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    Single,
    Double,
    Triple,
}

impl ClickKind {
    /// Single clicks start a drag selection; multi-clicks hold their selection
    pub fn starts_drag(self) -> bool {
        matches!(self, ClickKind::Single)
    }
}

/// Click tracking state for double/triple click detection.
///
/// Presses are stamped with the host's frame counter. A press within
/// `threshold` frames of the previous one continues the sequence; the third
/// press of a sequence resets the count so the next press starts over.
#[derive(Debug, Clone)]
pub struct ClickClassifier {
    last_click_frame: Option<u64>,
    click_count: u8,
    threshold: u64,
}

impl Default for ClickClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_CLICK_FRAMES)
    }
}

impl ClickClassifier {
    pub fn new(threshold: u64) -> Self {
        Self {
            last_click_frame: None,
            click_count: 0,
            threshold,
        }
    }

    pub fn click_count(&self) -> u8 {
        self.click_count
    }

    /// Register a press at `frame` and classify it
    pub fn register_press(&mut self, frame: u64) -> ClickKind {
        let is_rapid = self
            .last_click_frame
            .is_some_and(|last| frame.saturating_sub(last) <= self.threshold);

        if is_rapid {
            self.click_count += 1;
        } else {
            self.click_count = 1;
        }
        self.last_click_frame = Some(frame);

        match self.click_count {
            1 => ClickKind::Single,
            2 => ClickKind::Double,
            _ => {
                self.click_count = 0;
                ClickKind::Triple
            }
        }
    }

    /// Forget the current sequence (e.g. after a shift-click)
    pub fn reset(&mut self) {
        self.click_count = 0;
        self.last_click_frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rapid_presses_escalate() {
        let mut clicks = ClickClassifier::new(10);
        assert_eq!(clicks.register_press(100), ClickKind::Single);
        assert_eq!(clicks.register_press(105), ClickKind::Double);
        assert_eq!(clicks.register_press(110), ClickKind::Triple);
        assert_eq!(clicks.click_count(), 0);
    }

    #[test]
    fn test_sequence_restarts_after_triple() {
        let mut clicks = ClickClassifier::new(10);
        clicks.register_press(1);
        clicks.register_press(2);
        clicks.register_press(3);
        assert_eq!(clicks.register_press(4), ClickKind::Single);
        assert_eq!(clicks.register_press(5), ClickKind::Double);
    }

    #[test]
    fn test_slow_press_resets_to_single() {
        let mut clicks = ClickClassifier::new(10);
        clicks.register_press(0);
        assert_eq!(clicks.register_press(11), ClickKind::Single);
        assert_eq!(clicks.register_press(30), ClickKind::Single);
        assert_eq!(clicks.click_count(), 1);
    }

    #[test]
    fn test_first_press_is_single_even_at_frame_zero() {
        let mut clicks = ClickClassifier::default();
        assert_eq!(clicks.register_press(0), ClickKind::Single);
    }

    #[test]
    fn test_reset_forgets_sequence() {
        let mut clicks = ClickClassifier::new(10);
        clicks.register_press(0);
        clicks.reset();
        assert_eq!(clicks.register_press(1), ClickKind::Single);
    }

    #[test]
    fn test_only_single_clicks_start_drag() {
        assert!(ClickKind::Single.starts_drag());
        assert!(!ClickKind::Double.starts_drag());
        assert!(!ClickKind::Triple.starts_drag());
    }
}
