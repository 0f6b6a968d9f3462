use serde::{Deserialize, Serialize};

/// Playback state of a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Constructed but never started.
    Idle,
    /// A timing loop is active.
    Running,
    /// Interrupted mid-flight; the playhead holds the interrupted position.
    Paused,
    /// The last run reached a terminal boundary.
    Completed,
}

impl PlaybackState {
    /// Get the name of this playback state
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }

    /// Check if a timing loop is active
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Check if playback reached a terminal boundary
    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Check if playback can be resumed from the current playhead
    #[inline]
    pub fn can_resume(&self) -> bool {
        matches!(self, Self::Idle | Self::Paused)
    }

    /// Check if playback can be paused
    #[inline]
    pub fn can_pause(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_names() {
        assert_eq!(PlaybackState::Idle.name(), "idle");
        assert_eq!(PlaybackState::Running.name(), "running");
        assert_eq!(PlaybackState::Paused.name(), "paused");
        assert_eq!(PlaybackState::Completed.name(), "completed");
    }

    #[test]
    fn state_transitions() {
        let state = PlaybackState::Idle;
        assert!(state.can_resume());
        assert!(!state.can_pause());
        assert!(!state.is_complete());

        let state = PlaybackState::Running;
        assert!(!state.can_resume());
        assert!(state.can_pause());
        assert!(state.is_running());

        let state = PlaybackState::Paused;
        assert!(state.can_resume());
        assert!(!state.can_pause());

        let state = PlaybackState::Completed;
        assert!(!state.can_resume());
        assert!(!state.can_pause());
        assert!(state.is_complete());
        assert!(!state.is_running());
    }
}
