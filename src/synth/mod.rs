use rand::Rng;

pub use self::oscillator::{Oscillator, Phase};
pub use self::waveform::{ParseWaveformError, Waveform};
use crate::{audio::clip::AudioClip, constants::DEFAULT_SAMPLE_RATE};

mod oscillator;
pub mod oscillators;
mod waveform;

/// Everything needed to render one clip.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SynthParams {
    /// The oscillator wave form.
    pub wave: Waveform,
    /// Frequency in Hz. Not range checked.
    pub frequency: f32,
    /// Peak amplitude, normally between 0 and 1. Not range checked.
    pub amplitude: f32,
    /// Samples per second.
    pub sample_rate: u32,
    /// Length of the clip in samples.
    pub num_samples: usize,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            wave: Waveform::Sine,
            frequency: 440.0,
            amplitude: 0.5,
            sample_rate: DEFAULT_SAMPLE_RATE,
            num_samples: DEFAULT_SAMPLE_RATE as usize,
        }
    }
}

impl SynthParams {
    /// One second of `wave` at the default sample rate.
    pub fn new(wave: Waveform, frequency: f32, amplitude: f32) -> Self {
        Self {
            wave,
            frequency,
            amplitude,
            ..Self::default()
        }
    }

    /// Synthesises the samples described by these parameters.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f32> {
        tracing::debug!(
            wave = %self.wave,
            frequency = self.frequency,
            amplitude = self.amplitude,
            sample_rate = self.sample_rate,
            num_samples = self.num_samples,
            "generating samples"
        );
        let mut osc = Oscillator::new(self.wave, self.frequency, self.amplitude, self.sample_rate);
        (0..self.num_samples).map(|_| osc.next_sample(rng)).collect()
    }

    /// Synthesises a mono clip at `sample_rate`.
    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R) -> AudioClip {
        AudioClip::mono(self.sample_rate, self.generate(rng))
    }
}

/// Generates `num_samples` samples of `wave` at the default sample rate.
///
/// Never fails: zero frequency, zero amplitude and zero length are all valid, and
/// out-of-range values produce whatever the formulas give.
pub fn generate<R: Rng + ?Sized>(
    wave: Waveform,
    num_samples: usize,
    frequency: f32,
    amplitude: f32,
    rng: &mut R,
) -> Vec<f32> {
    SynthParams {
        num_samples,
        ..SynthParams::new(wave, frequency, amplitude)
    }
    .generate(rng)
}
