use std::path::Path;

use crate::error::{Error, Result};

/// A fully decoded mono waveform plus its native sample rate.
///
/// Samples are in `[-1.0, 1.0]`. The whole file is held in memory; nothing
/// here is streamed or chunked.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSamples {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl AudioSamples {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Wave duration in seconds.
    pub fn duration(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

fn unreadable(path: &Path, reason: impl ToString) -> Error {
    Error::UnreadableAudio {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Reads a whole WAV file into memory.
///
/// Only single-channel 32-bit float PCM is accepted. Stereo or integer
/// encodings are rejected rather than silently converted.
pub fn read_wav(path: impl AsRef<Path>) -> Result<AudioSamples> {
    let path = path.as_ref();
    let mut reader = hound::WavReader::open(path).map_err(|e| unreadable(path, e))?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err(unreadable(
            path,
            format!("expected 1 channel, got {}", spec.channels),
        ));
    }
    if spec.sample_format != hound::SampleFormat::Float || spec.bits_per_sample != 32 {
        return Err(unreadable(
            path,
            format!(
                "expected 32-bit float PCM, got {}-bit {:?}",
                spec.bits_per_sample, spec.sample_format
            ),
        ));
    }

    let samples = reader
        .samples::<f32>()
        .collect::<std::result::Result<Vec<f32>, _>>()
        .map_err(|e| unreadable(path, e))?;

    Ok(AudioSamples {
        samples,
        sample_rate: spec.sample_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_wav(name: &str, spec: hound::WavSpec, frames: usize) -> PathBuf {
        let path = std::env::temp_dir().join(format!("dictate-audio-{name}.wav"));
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for i in 0..frames * spec.channels as usize {
            match spec.sample_format {
                hound::SampleFormat::Float => writer.write_sample((i % 7) as f32 / 10.0).unwrap(),
                hound::SampleFormat::Int => writer.write_sample((i % 7) as i16).unwrap(),
            }
        }
        writer.finalize().unwrap();
        path
    }

    #[test]
    fn reads_mono_float_wav() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16000,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let path = write_wav("mono-float", spec, 1600);
        let audio = read_wav(&path).unwrap();
        assert_eq!(audio.len(), 1600);
        assert_eq!(audio.sample_rate, 16000);
        assert!((audio.duration() - 0.1).abs() < 1e-6);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn rejects_stereo() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 16000,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let path = write_wav("stereo", spec, 100);
        let err = read_wav(&path).unwrap_err();
        assert!(matches!(err, Error::UnreadableAudio { .. }));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn rejects_integer_pcm() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let path = write_wav("int16", spec, 100);
        let err = read_wav(&path).unwrap_err();
        assert!(matches!(err, Error::UnreadableAudio { .. }));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn rejects_missing_file() {
        let path = std::env::temp_dir().join("dictate-audio-does-not-exist.wav");
        let err = read_wav(&path).unwrap_err();
        assert!(matches!(err, Error::UnreadableAudio { .. }));
    }
}
