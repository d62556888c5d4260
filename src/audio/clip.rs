use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::convert::{dequantize, max_value, quantize};

/// A mono clip of normalized samples.
#[derive(Clone, Debug)]
pub struct AudioClip {
    sample_rate: u32,
    data: Box<[f32]>,
    peaks: Option<(f32, f32)>,
}

impl AudioClip {
    pub fn mono(sample_rate: u32, samples: Vec<f32>) -> Self {
        Self {
            sample_rate,
            data: samples.into_boxed_slice(),
            peaks: None,
        }
    }

    pub fn read_wav(reader: impl Read) -> Result<Self, ReadClipError> {
        let wav = hound::WavReader::new(reader)?;

        // Extract information from the file header
        let spec = wav.spec();
        let length = wav.duration() as usize;
        if spec.channels != 1 {
            return Err(ReadClipError::BadFormat("Unsupported number of channels"));
        }

        // Read the samples, normalized into `f32` values between -1.0 and 1.0
        let samples: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Int => {
                let max_value = max_value(spec.bits_per_sample)
                    .ok_or(ReadClipError::BadFormat("Unsupported bit depth"))?;
                wav.into_samples::<i32>()
                    .map(|s| s.map(|s| dequantize(s, max_value)))
                    .collect::<Result<_, _>>()
            }
            hound::SampleFormat::Float => wav.into_samples::<f32>().collect(),
        }?;
        if samples.len() != length {
            return Err(ReadClipError::UnexpectedError);
        }

        Ok(Self::mono(spec.sample_rate, samples))
    }

    /// Writes the clip as a mono, signed integer PCM wave file.
    ///
    /// The file is first written next to `path` and only moved into place once complete,
    /// so a failed write never leaves a truncated file at `path`.
    pub fn write_wav(&self, path: impl AsRef<Path>, bits_per_sample: u16) -> Result<(), WriteClipError> {
        let path = path.as_ref();
        let max_value = max_value(bits_per_sample).ok_or(WriteClipError::BadFormat("Unsupported bit depth"))?;
        if let Some(index) = self.data.iter().position(|s| !s.is_finite()) {
            return Err(WriteClipError::NonFiniteSample(index));
        }

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample,
            sample_format: hound::SampleFormat::Int,
        };
        let partial = partial_path(path);
        let result = self
            .write_samples(&partial, spec, max_value)
            .and_then(|()| fs::rename(&partial, path).map_err(WriteClipError::from));
        if result.is_err() {
            fs::remove_file(&partial).ok();
        }
        result?;

        tracing::info!(
            path = %path.display(),
            samples = self.data.len(),
            sample_rate = self.sample_rate,
            bits_per_sample,
            "wrote wave file"
        );
        Ok(())
    }

    fn write_samples(&self, path: &Path, spec: hound::WavSpec, max_value: i32) -> Result<(), WriteClipError> {
        let mut wav = hound::WavWriter::create(path, spec)?;
        for &sample in self.data.iter() {
            wav.write_sample(quantize(sample, max_value))?;
        }
        wav.finalize()?;
        Ok(())
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[f32] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Calculates the extreme values (minimum and maximum) of the samples.
    pub fn analyze_peaks(&mut self) -> (f32, f32) {
        *self.peaks.get_or_insert_with(|| {
            (
                self.data.iter().copied().reduce(f32::min).unwrap_or(0.0),
                self.data.iter().copied().reduce(f32::max).unwrap_or(0.0),
            )
        })
    }
}

/// Gets the path of the temporary file a clip is written to before being moved to `path`.
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

#[derive(Error, Debug)]
pub enum ReadClipError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Format error: {0}")]
    BadFormat(&'static str),
    #[error("Unexpected error")]
    UnexpectedError,
}

impl From<hound::Error> for ReadClipError {
    fn from(err: hound::Error) -> Self {
        use hound::Error as A;
        use ReadClipError as B;
        match err {
            A::IoError(inner) => B::IoError(inner),
            A::FormatError(inner) => B::BadFormat(inner),
            A::Unsupported => B::BadFormat("Unsupported format"),
            _ => B::UnexpectedError,
        }
    }
}

#[derive(Error, Debug)]
pub enum WriteClipError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Format error: {0}")]
    BadFormat(&'static str),
    #[error("Sample {0} is not a finite number")]
    NonFiniteSample(usize),
    #[error("Unexpected error")]
    UnexpectedError,
}

impl From<hound::Error> for WriteClipError {
    fn from(err: hound::Error) -> Self {
        use hound::Error as A;
        use WriteClipError as B;
        match err {
            A::IoError(inner) => B::IoError(inner),
            A::FormatError(inner) => B::BadFormat(inner),
            A::TooWide => B::BadFormat("Sample too wide for the bit depth"),
            A::Unsupported => B::BadFormat("Unsupported format"),
            _ => B::UnexpectedError,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs::File;

    fn ramp() -> AudioClip {
        AudioClip::mono(44100, vec![0.0, 0.5, 1.0, -0.5, -1.0, 0.25])
    }

    #[test]
    fn test_write_mono_16_bit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        ramp().write_wav(&path, 16).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);
        let samples: Vec<i16> = reader.into_samples().collect::<Result<_, _>>().unwrap();
        assert_eq!(samples, vec![0, 16384, 32767, -16384, -32767, 8192]);
    }

    #[test]
    fn test_write_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        ramp().write_wav(&path, 16).unwrap();
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("out.wav")]);
    }

    #[test]
    fn test_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let clip = ramp();
        clip.write_wav(&path, 24).unwrap();

        let read = AudioClip::read_wav(File::open(&path).unwrap()).unwrap();
        assert_eq!(read.sample_rate(), 44100);
        assert_eq!(read.len(), clip.len());
        for (a, b) in read.samples().iter().zip(clip.samples()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_write_empty_clip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.wav");
        AudioClip::mono(44100, vec![]).write_wav(&path, 16).unwrap();
        let read = AudioClip::read_wav(File::open(&path).unwrap()).unwrap();
        assert!(read.is_empty());
    }

    #[test]
    fn test_write_clips_out_of_range_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loud.wav");
        AudioClip::mono(44100, vec![2.0, -3.0]).write_wav(&path, 16).unwrap();
        let samples: Vec<i16> = hound::WavReader::open(&path)
            .unwrap()
            .into_samples()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(samples, vec![32767, -32767]);
    }

    #[test]
    fn test_write_rejects_non_finite_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nan.wav");
        let clip = AudioClip::mono(44100, vec![0.0, f32::NAN]);
        assert!(matches!(clip.write_wav(&path, 16), Err(WriteClipError::NonFiniteSample(1))));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_rejects_unsupported_bit_depth() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("odd.wav");
        assert!(matches!(ramp().write_wav(&path, 12), Err(WriteClipError::BadFormat(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.wav");
        assert!(matches!(ramp().write_wav(&path, 16), Err(WriteClipError::IoError(_))));
    }

    #[test]
    fn test_analyze_peaks() {
        assert_eq!(ramp().analyze_peaks(), (-1.0, 1.0));
        assert_eq!(AudioClip::mono(44100, vec![]).analyze_peaks(), (0.0, 0.0));
    }
}
