//! Short synthesized tones, encoded as in-memory WAV files.

use std::f32::consts::TAU;
use std::time::Duration;

pub const SAMPLE_RATE: u32 = 22_050;
pub const TONE_DURATION: Duration = Duration::from_millis(300);

const START_GAIN: f32 = 0.3;
const END_GAIN: f32 = 0.01;
const HEADER_LEN: usize = 44;

/// A sine wave whose gain decays exponentially from 0.3 to 0.01, as
/// 16-bit mono PCM in a RIFF/WAVE container.
pub fn sine_wav(frequency_hz: f32, duration: Duration) -> Vec<u8> {
    let sample_count = (duration.as_secs_f32() * SAMPLE_RATE as f32).round() as u32;
    let data_len = sample_count * 2;

    let mut wav = Vec::with_capacity(HEADER_LEN + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());

    let decay = (END_GAIN / START_GAIN).ln();
    for n in 0..sample_count {
        let progress = n as f32 / sample_count as f32;
        let gain = START_GAIN * (decay * progress).exp();
        let t = n as f32 / SAMPLE_RATE as f32;
        let sample = (TAU * frequency_hz * t).sin() * gain;
        wav.extend_from_slice(&((sample * i16::MAX as f32) as i16).to_le_bytes());
    }
    wav
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(wav: &[u8]) -> Vec<i16> {
        wav[HEADER_LEN..]
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect()
    }

    #[test]
    fn test_header_describes_mono_pcm() {
        let wav = sine_wav(261.63, TONE_DURATION);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..16], b"WAVEfmt ");
        assert_eq!(u32::from_le_bytes(wav[24..28].try_into().unwrap()), SAMPLE_RATE);
        let data_len = u32::from_le_bytes(wav[40..44].try_into().unwrap());
        assert_eq!(data_len as usize, wav.len() - HEADER_LEN);
        assert_eq!(data_len, 2 * 6615);
    }

    #[test]
    fn test_gain_decays() {
        let samples = samples(&sine_wav(440.0, TONE_DURATION));
        let peak = |range: &[i16]| range.iter().map(|s| s.unsigned_abs()).max().unwrap();
        let head = peak(&samples[..500]);
        let tail = peak(&samples[samples.len() - 500..]);
        assert!(head as f32 <= START_GAIN * i16::MAX as f32 + 1.0);
        assert!(head > 8000);
        assert!(tail < head / 10);
    }
}
