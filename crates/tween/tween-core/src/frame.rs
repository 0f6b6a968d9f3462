use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One quantized sample of a playback: how far along the clock is, how far
/// along the transition curve says the value should be, and which frame slot
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Fraction of elapsed time, 0.0 - 1.0, clamped at the boundaries.
    pub completed: f64,
    /// Curve-space progress, `curve(completed)`. Curves may overshoot
    /// outside 0.0 - 1.0.
    pub transitioned: f64,
    /// Frame slot index, rounded from elapsed time.
    pub index: u32,
    /// Elapsed playback time used to derive the above.
    pub elapsed: Duration,
}

/// Fixed timing parameters of one playback run, handed to listeners before
/// the first frame so they can precompute resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    /// Frames requested per second.
    pub framerate: u32,
    /// Number of whole frame slots in the duration.
    pub frame_count: u32,
    /// Wall-clock spacing between frames, `1 / framerate`.
    pub frame_interval: Duration,
    /// Total playback span.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_plain_data() {
        let frame = Frame {
            completed: 0.5,
            transitioned: 0.25,
            index: 30,
            elapsed: Duration::from_millis(500),
        };
        let copy = frame;
        assert_eq!(copy, frame);
    }
}
