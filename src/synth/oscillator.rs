use rand::Rng;

use super::waveform::Waveform;

/// Position within one period of the waveform, between 0 and 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Phase {
    position: f64,
    increment: f64,
}

impl Phase {
    pub fn new(frequency: f32, sample_rate: u32) -> Self {
        Self {
            position: 0.0,
            increment: f64::from(frequency) / f64::from(sample_rate),
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Moves to the next sample and returns the position the current sample should use.
    ///
    /// The wrap is a single subtraction rather than a modulo, so an increment of 1.0 or
    /// more (a frequency at or above the sample rate) leaves the position past 1.0.
    pub fn advance(&mut self) -> f64 {
        let position = self.position;
        self.position += self.increment;
        if self.position >= 1.0 {
            self.position -= 1.0;
        }
        position
    }
}

/// A single oscillator, rendering one waveform at a fixed frequency and amplitude.
#[derive(Clone, Copy, Debug)]
pub struct Oscillator {
    wave: Waveform,
    amplitude: f32,
    phase: Phase,
}

impl Oscillator {
    pub fn new(wave: Waveform, frequency: f32, amplitude: f32, sample_rate: u32) -> Self {
        Self {
            wave,
            amplitude,
            phase: Phase::new(frequency, sample_rate),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Computes the next sample. `rng` is only drawn from for `Waveform::Noise`.
    pub fn next_sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f32 {
        let phase = self.phase.advance();
        self.wave.sample(phase, self.amplitude, rng)
    }
}
