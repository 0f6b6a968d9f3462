use crate::frame::{Frame, Timing};

/// Consumer of playback frames.
///
/// A listener receives exactly one `on_start` per run initiated by
/// [`Tween::play`](crate::Tween::play) or
/// [`Tween::play_reverse`](crate::Tween::play_reverse), zero or more
/// `on_frame` calls, and exactly one `on_end` when the run reaches a
/// terminal boundary. A pause that is not a stop never produces `on_end`.
///
/// Callbacks run on the playback thread and should not block; a listener
/// that panics is logged and skipped for that callback, without disturbing
/// the engine or its sibling listeners.
pub trait Listener: Send {
    /// Signals the beginning of a run, before the first frame. May be used
    /// to snapshot endpoints or precompute resources.
    fn on_start(&mut self, timing: &Timing) {
        let _ = timing;
    }

    /// Receives one frame per dispatched tick, plus the synthetic initial
    /// and boundary frames.
    fn on_frame(&mut self, frame: &Frame);

    /// Signals natural completion, after the boundary frame. May be used to
    /// release resources.
    fn on_end(&mut self) {}
}
