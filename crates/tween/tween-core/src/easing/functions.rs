use std::f64::consts::{E, PI};

/// Identity curve: progress tracks elapsed time 1:1.
#[inline]
pub fn linear(completed: f64) -> f64 {
    completed
}

/// Gentle ease-in-ease-out, half a cosine wave.
#[inline]
pub fn swing(completed: f64) -> f64 {
    0.5 - (completed * PI).cos() / 2.0
}

/// Eases in a Quad transition.
#[inline]
pub fn quad_in(completed: f64) -> f64 {
    completed.powi(2)
}

/// Eases out a Quad transition.
#[inline]
pub fn quad_out(completed: f64) -> f64 {
    1.0 - quad_in(1.0 - completed)
}

/// Eases in and out a Quad transition.
#[inline]
pub fn quad_in_out(completed: f64) -> f64 {
    if completed < 0.5 {
        quad_in(completed * 2.0) / 2.0
    } else {
        1.0 - quad_in(completed * -2.0 + 2.0) / 2.0
    }
}

/// Eases in a Cubic transition.
#[inline]
pub fn cubic_in(completed: f64) -> f64 {
    completed.powi(3)
}

/// Eases out a Cubic transition.
#[inline]
pub fn cubic_out(completed: f64) -> f64 {
    1.0 - cubic_in(1.0 - completed)
}

/// Eases in and out a Cubic transition.
#[inline]
pub fn cubic_in_out(completed: f64) -> f64 {
    if completed < 0.5 {
        cubic_in(completed * 2.0) / 2.0
    } else {
        1.0 - cubic_in(completed * -2.0 + 2.0) / 2.0
    }
}

/// Eases in a Quart transition.
#[inline]
pub fn quart_in(completed: f64) -> f64 {
    completed.powi(4)
}

/// Eases out a Quart transition.
#[inline]
pub fn quart_out(completed: f64) -> f64 {
    1.0 - quart_in(1.0 - completed)
}

/// Eases in and out a Quart transition.
#[inline]
pub fn quart_in_out(completed: f64) -> f64 {
    if completed < 0.5 {
        quart_in(completed * 2.0) / 2.0
    } else {
        1.0 - quart_in(completed * -2.0 + 2.0) / 2.0
    }
}

/// Eases in a Quint transition.
#[inline]
pub fn quint_in(completed: f64) -> f64 {
    completed.powi(5)
}

/// Eases out a Quint transition.
#[inline]
pub fn quint_out(completed: f64) -> f64 {
    1.0 - quint_in(1.0 - completed)
}

/// Eases in and out a Quint transition.
#[inline]
pub fn quint_in_out(completed: f64) -> f64 {
    if completed < 0.5 {
        quint_in(completed * 2.0) / 2.0
    } else {
        1.0 - quint_in(completed * -2.0 + 2.0) / 2.0
    }
}

/// Eases in an Expo transition.
#[inline]
pub fn expo_in(completed: f64) -> f64 {
    completed.powi(6)
}

/// Eases out an Expo transition.
#[inline]
pub fn expo_out(completed: f64) -> f64 {
    1.0 - expo_in(1.0 - completed)
}

/// Eases in and out an Expo transition.
#[inline]
pub fn expo_in_out(completed: f64) -> f64 {
    if completed < 0.5 {
        expo_in(completed * 2.0) / 2.0
    } else {
        1.0 - expo_in(completed * -2.0 + 2.0) / 2.0
    }
}

/// Eases in a Sine transition.
#[inline]
pub fn sine_in(completed: f64) -> f64 {
    1.0 - (completed * PI / 2.0).cos()
}

/// Eases out a Sine transition.
#[inline]
pub fn sine_out(completed: f64) -> f64 {
    1.0 - sine_in(1.0 - completed)
}

/// Eases in and out a Sine transition.
#[inline]
pub fn sine_in_out(completed: f64) -> f64 {
    if completed < 0.5 {
        sine_in(completed * 2.0) / 2.0
    } else {
        1.0 - sine_in(completed * -2.0 + 2.0) / 2.0
    }
}

/// Eases in a Circ transition.
#[inline]
pub fn circ_in(completed: f64) -> f64 {
    1.0 - (1.0 - completed * completed).sqrt()
}

/// Eases out a Circ transition.
#[inline]
pub fn circ_out(completed: f64) -> f64 {
    1.0 - circ_in(1.0 - completed)
}

/// Eases in and out a Circ transition.
#[inline]
pub fn circ_in_out(completed: f64) -> f64 {
    if completed < 0.5 {
        circ_in(completed * 2.0) / 2.0
    } else {
        1.0 - circ_in(completed * -2.0 + 2.0) / 2.0
    }
}

/// Eases in a Log transition.
#[inline]
pub fn log_in(completed: f64) -> f64 {
    1.0 - ((1.0 - completed) * (E - 1.0) + 1.0).ln()
}

/// Eases out a Log transition.
#[inline]
pub fn log_out(completed: f64) -> f64 {
    1.0 - log_in(1.0 - completed)
}

/// Eases in and out a Log transition.
#[inline]
pub fn log_in_out(completed: f64) -> f64 {
    if completed < 0.5 {
        log_in(completed * 2.0) / 2.0
    } else {
        1.0 - log_in(completed * -2.0 + 2.0) / 2.0
    }
}

/// Eases in an Elastic transition. Overshoots below zero on the way in.
#[inline]
pub fn elastic_in(completed: f64) -> f64 {
    if completed == 0.0 || completed == 1.0 {
        return completed;
    }
    -(2.0_f64.powf(8.0 * (completed - 1.0))) * (((completed - 1.0) * 80.0 - 7.5) * PI / 15.0).sin()
}

/// Eases out an Elastic transition.
#[inline]
pub fn elastic_out(completed: f64) -> f64 {
    1.0 - elastic_in(1.0 - completed)
}

/// Eases in and out an Elastic transition.
#[inline]
pub fn elastic_in_out(completed: f64) -> f64 {
    if completed < 0.5 {
        elastic_in(completed * 2.0) / 2.0
    } else {
        1.0 - elastic_in(completed * -2.0 + 2.0) / 2.0
    }
}

/// Eases in a Back transition. Pulls back below zero before advancing.
#[inline]
pub fn back_in(completed: f64) -> f64 {
    completed * completed * (3.0 * completed - 2.0)
}

/// Eases out a Back transition.
#[inline]
pub fn back_out(completed: f64) -> f64 {
    1.0 - back_in(1.0 - completed)
}

/// Eases in and out a Back transition.
#[inline]
pub fn back_in_out(completed: f64) -> f64 {
    if completed < 0.5 {
        back_in(completed * 2.0) / 2.0
    } else {
        1.0 - back_in(completed * -2.0 + 2.0) / 2.0
    }
}

/// Eases in a Bounce transition: a sequence of decaying parabolic arcs.
#[inline]
pub fn bounce_in(completed: f64) -> f64 {
    let mut bounce = 3.0_f64;
    let mut pow2 = 2.0_f64.powf(bounce);
    while completed < (pow2 - 1.0) / 11.0 {
        bounce -= 1.0;
        pow2 = 2.0_f64.powf(bounce);
    }
    1.0 / 4.0_f64.powf(3.0 - bounce) - 7.5625 * ((pow2 * 3.0 - 2.0) / 22.0 - completed).powi(2)
}

/// Eases out a Bounce transition.
#[inline]
pub fn bounce_out(completed: f64) -> f64 {
    1.0 - bounce_in(1.0 - completed)
}

/// Eases in and out a Bounce transition.
#[inline]
pub fn bounce_in_out(completed: f64) -> f64 {
    if completed < 0.5 {
        bounce_in(completed * 2.0) / 2.0
    } else {
        1.0 - bounce_in(completed * -2.0 + 2.0) / 2.0
    }
}
