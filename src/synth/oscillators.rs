//! Unit waveform shapes, each mapping a phase in `[0, 1)` to a value in `[-1, 1]`.

use std::f64::consts::PI;

pub fn sine(phase: f64) -> f64 {
    (2.0 * PI * phase).sin()
}

pub fn square(phase: f64) -> f64 {
    if phase >= 0.5 {
        1.0
    } else {
        -1.0
    }
}

pub fn tri(phase: f64) -> f64 {
    if phase < 0.5 {
        4.0 * phase - 1.0
    } else {
        1.0 - 4.0 * (phase - 0.5)
    }
}

pub fn saw(phase: f64) -> f64 {
    2.0 * phase - 1.0
}
