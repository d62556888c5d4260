/// Sample rate used for synthesis and for the written file.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Bit depth of the integer PCM samples in the written file.
pub const DEFAULT_BITS_PER_SAMPLE: u16 = 16;

/// File written to the working directory when no output path is given.
pub const DEFAULT_OUTPUT: &str = "mysound.wav";
