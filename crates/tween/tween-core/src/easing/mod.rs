//! Transition curve library.
//!
//! Every curve is a pure `fn(f64) -> f64` mapping a time-completion
//! fraction in `[0, 1]` to interpolation progress. All curves map 0 to 0
//! and 1 to 1; `elastic` and `back` overshoot in between.

mod functions;

pub use functions::*;
