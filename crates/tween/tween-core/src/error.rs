//! Error types for the tween engine

/// Error type for tween construction and control operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TweenError {
    /// Playback duration of zero
    #[error("tween duration must be greater than zero")]
    ZeroDuration,

    /// Framerate outside the usable range
    #[error("framerate must be at least 1 frame per second, got {framerate}")]
    InvalidFramerate { framerate: u32 },

    /// Operation not permitted in the current playback state
    #[error("invalid playback state: {current} -> {requested}")]
    InvalidState {
        current: &'static str,
        requested: &'static str,
    },
}
