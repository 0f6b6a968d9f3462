//! Listener implementations that turn transition progress into domain
//! values and stream them over channels.
//!
//! Each updater is constructed with [`Color::channel`] / [`Scalar::channel`]
//! and comes paired with a stream holding the receiving ends: one channel
//! for per-frame values, one signalled once when the playback completes.

pub mod color;
pub mod scalar;

pub use color::{Color, ColorStream, Rgba};
pub use scalar::{Scalar, ScalarStream};
