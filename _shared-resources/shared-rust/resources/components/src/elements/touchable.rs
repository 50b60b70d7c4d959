// Touch Feedback
// One Touchable interface with a haptic variant (iOS) and a plain variant (Android)

use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::core::Platform;

/// Notification kinds a haptic engine can play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticNotification {
    /// Played on every press of an iOS tab
    Success,
}

/// Sink for haptic notifications (a vibration motor, a terminal bell, a test recorder)
pub trait HapticEngine {
    fn notify(&self, notification: HapticNotification);
}

/// Engine that only logs
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentHaptics;

impl HapticEngine for SilentHaptics {
    fn notify(&self, notification: HapticNotification) {
        trace!(?notification, "haptic notification (silent)");
    }
}

/// Pressable region wrapping a tab label
pub trait Touchable {
    fn platform(&self) -> Platform;

    /// Run press feedback and return the index to report upward
    fn press(&self, index: usize) -> usize;
}

/// Fires a success notification on every press
pub struct HapticTouchable {
    engine: Rc<dyn HapticEngine>,
}

impl HapticTouchable {
    pub fn new(engine: Rc<dyn HapticEngine>) -> Self {
        Self { engine }
    }
}

impl Touchable for HapticTouchable {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    fn press(&self, index: usize) -> usize {
        self.engine.notify(HapticNotification::Success);
        index
    }
}

impl fmt::Debug for HapticTouchable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HapticTouchable").finish_non_exhaustive()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTouchable;

impl Touchable for PlainTouchable {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn press(&self, index: usize) -> usize {
        index
    }
}

/// Pick the touch wrapper for a platform. Called once when a control is built.
pub fn touchable_for(platform: Platform, engine: Rc<dyn HapticEngine>) -> Box<dyn Touchable> {
    if platform.fires_haptics() {
        Box::new(HapticTouchable::new(engine))
    } else {
        Box::new(PlainTouchable)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every notification it receives
    #[derive(Debug, Default)]
    pub(crate) struct RecordingHaptics {
        pub(crate) received: RefCell<Vec<HapticNotification>>,
    }

    impl HapticEngine for RecordingHaptics {
        fn notify(&self, notification: HapticNotification) {
            self.received.borrow_mut().push(notification);
        }
    }

    #[test]
    fn test_ios_press_fires_success() {
        let haptics = Rc::new(RecordingHaptics::default());
        let touchable = touchable_for(Platform::Ios, haptics.clone());

        assert_eq!(touchable.platform(), Platform::Ios);
        assert_eq!(touchable.press(2), 2);
        assert_eq!(*haptics.received.borrow(), vec![HapticNotification::Success]);
    }

    #[test]
    fn test_android_press_is_silent() {
        let haptics = Rc::new(RecordingHaptics::default());
        let touchable = touchable_for(Platform::Android, haptics.clone());

        assert_eq!(touchable.platform(), Platform::Android);
        assert_eq!(touchable.press(1), 1);
        assert!(haptics.received.borrow().is_empty());
    }
}
