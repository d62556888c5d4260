use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use super::oscillators::{saw, sine, square, tri};

/// The shape of the oscillator output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
    Noise,
}

impl Waveform {
    pub const ALL: [Waveform; 5] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::Triangle,
        Waveform::Noise,
    ];

    /// The keyword used to select this waveform on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Sawtooth => "saw",
            Waveform::Triangle => "triangle",
            Waveform::Noise => "noise",
        }
    }

    /// Computes one sample at `phase`, scaled by `amplitude`.
    /// Only `Noise` draws from `rng`; every other shape is a pure function of the phase.
    pub fn sample<R: Rng + ?Sized>(&self, phase: f64, amplitude: f32, rng: &mut R) -> f32 {
        let amplitude = f64::from(amplitude);
        let sample = match self {
            Waveform::Sine => sine(phase) * amplitude,
            Waveform::Square => square(phase) * amplitude,
            Waveform::Sawtooth => saw(phase) * amplitude,
            Waveform::Triangle => tri(phase) * amplitude,
            Waveform::Noise => (rng.gen::<f64>() * 2.0 - 1.0) * amplitude,
        };
        sample as f32
    }
}

impl std::fmt::Display for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = ParseWaveformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Waveform::ALL
            .into_iter()
            .find(|wave| wave.name() == s)
            .ok_or_else(|| ParseWaveformError(s.to_owned()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown waveform `{0}` (expected one of: sine, square, saw, triangle, noise)")]
pub struct ParseWaveformError(pub String);
