//! WAV loading and saving for recorded answers.
//!
//! Recorded answers are stored as WAV files between the recording control and
//! the evaluation pipeline. Loading accepts arbitrary sample rates and channel
//! counts, downmixing and resampling to the 16kHz mono PCM Whisper expects.

use crate::defaults::SAMPLE_RATE;
use crate::error::{Result, VocoachError};
use std::io::Read;
use std::path::Path;

/// Read WAV data from any reader, returning 16kHz mono i16 samples.
pub fn read_samples<R: Read>(reader: R) -> Result<Vec<i16>> {
    let mut wav_reader = hound::WavReader::new(reader).map_err(|e| VocoachError::AudioCapture {
        message: format!("Failed to parse WAV file: {}", e),
    })?;

    let spec = wav_reader.spec();
    let source_rate = spec.sample_rate;
    let source_channels = spec.channels;

    let raw_samples: Vec<i16> = wav_reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| VocoachError::AudioCapture {
            message: format!("Failed to read WAV samples: {}", e),
        })?;

    // Downmix to mono by averaging channels
    let mono_samples = if source_channels > 1 {
        let channels = source_channels as usize;
        raw_samples
            .chunks_exact(channels)
            .map(|frame| {
                let sum: i32 = frame.iter().map(|&s| s as i32).sum();
                (sum / channels as i32) as i16
            })
            .collect()
    } else {
        raw_samples
    };

    // Resample to 16kHz if needed
    if source_rate != SAMPLE_RATE {
        Ok(resample(&mono_samples, source_rate, SAMPLE_RATE))
    } else {
        Ok(mono_samples)
    }
}

/// Load a WAV file from disk, returning 16kHz mono i16 samples.
pub fn load(path: &Path) -> Result<Vec<i16>> {
    let file = std::fs::File::open(path).map_err(|e| VocoachError::AudioCapture {
        message: format!("Failed to open {}: {}", path.display(), e),
    })?;
    read_samples(std::io::BufReader::new(file))
}

/// Save 16kHz mono i16 samples as a WAV file.
pub fn save(path: &Path, samples: &[i16]) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer =
        hound::WavWriter::create(path, spec).map_err(|e| VocoachError::AudioCapture {
            message: format!("Failed to create {}: {}", path.display(), e),
        })?;
    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| VocoachError::AudioCapture {
                message: format!("Failed to write WAV sample: {}", e),
            })?;
    }
    writer.finalize().map_err(|e| VocoachError::AudioCapture {
        message: format!("Failed to finalize {}: {}", path.display(), e),
    })
}

/// Simple linear interpolation resampling.
pub(crate) fn resample(samples: &[i16], from_rate: u32, to_rate: u32) -> Vec<i16> {
    if from_rate == to_rate {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let output_len = (samples.len() as f64 / ratio).ceil() as usize;

    (0..output_len)
        .map(|i| {
            let source_pos = i as f64 * ratio;
            let source_idx = source_pos.floor() as usize;
            let fraction = source_pos - source_idx as f64;

            if source_idx + 1 >= samples.len() {
                samples[source_idx]
            } else {
                let left = samples[source_idx] as f64;
                let right = samples[source_idx + 1] as f64;
                (left + (right - left) * fraction) as i16
            }
        })
        .collect()
}
