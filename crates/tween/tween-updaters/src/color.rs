use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use tween_core::{Frame, Listener, Timing};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Receiving side of a color tween: interpolated colors, then one done
/// signal after the final boundary color.
pub struct ColorStream {
    pub updates: Receiver<Rgba>,
    pub done: Receiver<()>,
}

/// Listener that interpolates between two colors and streams the result,
/// one color per frame. All four channels interpolate; values are rounded
/// and clamped, so overshooting curves stay within the byte range.
pub struct Color {
    from: Rgba,
    to: Rgba,
    span_r: f64,
    span_g: f64,
    span_b: f64,
    span_a: f64,
    updates: Sender<Rgba>,
    done: Sender<()>,
}

impl Color {
    /// Create a color updater and the stream its values arrive on.
    pub fn channel(from: Rgba, to: Rgba) -> (Self, ColorStream) {
        let (updates_tx, updates_rx) = unbounded();
        let (done_tx, done_rx) = unbounded();
        (
            Self {
                from,
                to,
                span_r: 0.0,
                span_g: 0.0,
                span_b: 0.0,
                span_a: 0.0,
                updates: updates_tx,
                done: done_tx,
            },
            ColorStream {
                updates: updates_rx,
                done: done_rx,
            },
        )
    }

    fn component(origin: u8, span: f64, transitioned: f64) -> u8 {
        (f64::from(origin) + span * transitioned)
            .round()
            .clamp(0.0, 255.0) as u8
    }
}

impl Listener for Color {
    fn on_start(&mut self, _timing: &Timing) {
        // How far each channel travels over the full transition.
        self.span_r = f64::from(self.to.r) - f64::from(self.from.r);
        self.span_g = f64::from(self.to.g) - f64::from(self.from.g);
        self.span_b = f64::from(self.to.b) - f64::from(self.from.b);
        self.span_a = f64::from(self.to.a) - f64::from(self.from.a);
    }

    fn on_frame(&mut self, frame: &Frame) {
        let color = Rgba {
            r: Self::component(self.from.r, self.span_r, frame.transitioned),
            g: Self::component(self.from.g, self.span_g, frame.transitioned),
            b: Self::component(self.from.b, self.span_b, frame.transitioned),
            a: Self::component(self.from.a, self.span_a, frame.transitioned),
        };
        if self.updates.send(color).is_err() {
            log::debug!("color stream receiver dropped, update discarded");
        }
    }

    fn on_end(&mut self) {
        let _ = self.done.send(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_rounds_and_clamps() {
        assert_eq!(Color::component(0, 255.0, 0.5), 128);
        assert_eq!(Color::component(0, 255.0, 1.2), 255);
        assert_eq!(Color::component(200, -200.0, 1.1), 0);
    }
}
