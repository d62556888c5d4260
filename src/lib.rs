pub mod audio;
pub mod constants;
pub mod convert;
pub mod synth;

pub use audio::clip::{AudioClip, ReadClipError, WriteClipError};
pub use synth::{generate, ParseWaveformError, SynthParams, Waveform};
