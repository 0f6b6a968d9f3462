use crossbeam_channel::{unbounded, Receiver, Sender};
use tween_core::{Frame, Listener};

/// Receiving side of a scalar tween.
pub struct ScalarStream {
    pub updates: Receiver<f64>,
    pub done: Receiver<()>,
}

/// Listener that interpolates a scalar range and streams one value per
/// frame. The value is not clamped; overshooting curves overshoot the
/// range.
pub struct Scalar {
    from: f64,
    span: f64,
    updates: Sender<f64>,
    done: Sender<()>,
}

impl Scalar {
    /// Create a scalar updater over `[from, to]` and the stream its values
    /// arrive on.
    pub fn channel(from: f64, to: f64) -> (Self, ScalarStream) {
        let (updates_tx, updates_rx) = unbounded();
        let (done_tx, done_rx) = unbounded();
        (
            Self {
                from,
                span: to - from,
                updates: updates_tx,
                done: done_tx,
            },
            ScalarStream {
                updates: updates_rx,
                done: done_rx,
            },
        )
    }
}

impl Listener for Scalar {
    fn on_frame(&mut self, frame: &Frame) {
        if self
            .updates
            .send(self.from + self.span * frame.transitioned)
            .is_err()
        {
            log::debug!("scalar stream receiver dropped, update discarded");
        }
    }

    fn on_end(&mut self) {
        let _ = self.done.send(());
    }
}
