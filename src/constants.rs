// Application constants

use std::time::Duration;

/// Handle name of the segmented control hosted by the demo
pub const HWND_MAIN_TABS: &str = "hwndMainTabs";

/// Selections kept in the on-screen history
pub const HISTORY_LIMIT: usize = 8;

/// Event poll timeout while the highlight is sliding
pub const ANIMATION_POLL: Duration = Duration::from_millis(16);

/// Event poll timeout when nothing is animating
pub const IDLE_POLL: Duration = Duration::from_millis(100);
