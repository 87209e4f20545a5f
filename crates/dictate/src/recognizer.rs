use std::ffi::{c_char, CStr, CString};
use std::mem;

use tracing::{debug, warn};

use crate::audio::AudioSamples;
use crate::config::{ModelConfig, RecognizerConfig};
use crate::default_provider;
use crate::error::{Error, Result};
use crate::utils::{cstr_to_string, cstring_from_str};

/// One decoded utterance.
///
/// Created fresh per decode call; carries no state between calls.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub text: String,
    /// Start offset of each token in seconds. Empty when the model does not
    /// report timestamps (whisper, for example).
    pub timestamps: Vec<f32>,
    pub tokens: Vec<String>,
    pub lang: String,
}

impl Transcript {
    fn from_raw(raw: &sherpa_rs_sys::SherpaOnnxOfflineRecognizerResult) -> Self {
        let text = unsafe { cstr_to_string(raw.text) };
        let lang = unsafe { cstr_to_string(raw.lang) };
        let count = raw.count.max(0) as usize;
        let timestamps = if raw.timestamps.is_null() {
            Vec::new()
        } else {
            unsafe { std::slice::from_raw_parts(raw.timestamps, count).to_vec() }
        };

        // Tokens arrive as consecutive NUL-terminated strings in one buffer.
        let mut tokens = Vec::with_capacity(count);
        let mut next_token = raw.tokens;
        for _ in 0..count {
            if next_token.is_null() {
                break;
            }
            let token = unsafe { CStr::from_ptr(next_token) };
            tokens.push(token.to_string_lossy().into_owned());
            next_token = next_token.wrapping_byte_offset(token.to_bytes_with_nul().len() as isize);
        }

        Self {
            text,
            timestamps,
            tokens,
            lang,
        }
    }
}

/// Safe handle over the engine's offline recognizer.
///
/// Construction loads the model artifacts referenced by the config;
/// [`OfflineRecognizer::decode`] runs feature extraction, inference and
/// search inside the engine and returns the final result synchronously.
pub struct OfflineRecognizer {
    recognizer: *const sherpa_rs_sys::SherpaOnnxOfflineRecognizer,
    expected_sample_rate: i32,
}

impl OfflineRecognizer {
    pub fn new(config: &RecognizerConfig) -> Result<Self> {
        let family = config.model.family();
        debug!(%family, "creating offline recognizer");

        let provider = config.provider.clone().unwrap_or_else(default_provider);
        let provider_ptr = cstring_from_str(&provider);
        let tokens_ptr = cstring_from_str(&config.tokens);
        let decoding_method_ptr = cstring_from_str(&config.decoding_method);

        let mut model_config: sherpa_rs_sys::SherpaOnnxOfflineModelConfig =
            unsafe { mem::zeroed() };
        model_config.debug = config.debug.into();
        model_config.num_threads = config.num_threads.unwrap_or(1);
        model_config.provider = provider_ptr.as_ptr();
        model_config.tokens = tokens_ptr.as_ptr();

        // Keeps the family-specific CStrings alive until the create call.
        let mut held: Vec<CString> = Vec::new();
        let mut hold = |s: &str| -> *const c_char {
            let cstr = cstring_from_str(s);
            let ptr = cstr.as_ptr();
            held.push(cstr);
            ptr
        };

        match &config.model {
            ModelConfig::Whisper(m) => {
                model_config.whisper = sherpa_rs_sys::SherpaOnnxOfflineWhisperModelConfig {
                    encoder: hold(&m.encoder),
                    decoder: hold(&m.decoder),
                    language: hold(&m.language),
                    task: hold(&m.task),
                    tail_paddings: m.tail_paddings,
                };
            }
            ModelConfig::Paraformer(m) => {
                model_config.paraformer = sherpa_rs_sys::SherpaOnnxOfflineParaformerModelConfig {
                    model: hold(&m.model),
                };
            }
            ModelConfig::SenseVoice(m) => {
                model_config.sense_voice = sherpa_rs_sys::SherpaOnnxOfflineSenseVoiceModelConfig {
                    model: hold(&m.model),
                    language: hold(&m.language),
                    use_itn: if m.use_inverse_text_normalization { 1 } else { 0 },
                };
            }
            ModelConfig::Moonshine(m) => {
                model_config.moonshine = sherpa_rs_sys::SherpaOnnxOfflineMoonshineModelConfig {
                    preprocessor: hold(&m.preprocessor),
                    encoder: hold(&m.encoder),
                    uncached_decoder: hold(&m.uncached_decoder),
                    cached_decoder: hold(&m.cached_decoder),
                };
            }
        }

        let mut c_config: sherpa_rs_sys::SherpaOnnxOfflineRecognizerConfig =
            unsafe { mem::zeroed() };
        c_config.decoding_method = decoding_method_ptr.as_ptr();
        c_config.feat_config = sherpa_rs_sys::SherpaOnnxFeatureConfig {
            sample_rate: config.feat.sample_rate,
            feature_dim: config.feat.feature_dim,
        };
        c_config.model_config = model_config;

        let recognizer = unsafe { sherpa_rs_sys::SherpaOnnxCreateOfflineRecognizer(&c_config) };
        if recognizer.is_null() {
            return Err(Error::RecognizerInit(format!(
                "engine could not load the {family} model files"
            )));
        }

        Ok(Self {
            recognizer,
            expected_sample_rate: config.feat.sample_rate,
        })
    }

    /// Decodes a whole utterance and returns the final transcript.
    ///
    /// The engine resamples internally when `audio.sample_rate` differs
    /// from the feature extractor's configured rate.
    pub fn decode(&mut self, audio: &AudioSamples) -> Result<Transcript> {
        if audio.is_empty() {
            return Err(Error::Decode("empty sample buffer".into()));
        }
        if audio.sample_rate as i32 != self.expected_sample_rate {
            warn!(
                wave = audio.sample_rate,
                expected = self.expected_sample_rate,
                "sample rate differs from the feature config, the engine will resample"
            );
        }

        unsafe {
            let stream = sherpa_rs_sys::SherpaOnnxCreateOfflineStream(self.recognizer);
            if stream.is_null() {
                return Err(Error::Decode(
                    "engine could not create an offline stream".into(),
                ));
            }
            sherpa_rs_sys::SherpaOnnxAcceptWaveformOffline(
                stream,
                audio.sample_rate as i32,
                audio.samples.as_ptr(),
                audio.samples.len() as i32,
            );
            sherpa_rs_sys::SherpaOnnxDecodeOfflineStream(self.recognizer, stream);

            let result_ptr = sherpa_rs_sys::SherpaOnnxGetOfflineStreamResult(stream);
            if result_ptr.is_null() {
                sherpa_rs_sys::SherpaOnnxDestroyOfflineStream(stream);
                return Err(Error::Decode("engine reported no result".into()));
            }
            let raw = result_ptr.read();
            let transcript = Transcript::from_raw(&raw);

            sherpa_rs_sys::SherpaOnnxDestroyOfflineRecognizerResult(result_ptr);
            sherpa_rs_sys::SherpaOnnxDestroyOfflineStream(stream);

            Ok(transcript)
        }
    }
}

unsafe impl Send for OfflineRecognizer {}
unsafe impl Sync for OfflineRecognizer {}

impl Drop for OfflineRecognizer {
    fn drop(&mut self) {
        unsafe {
            sherpa_rs_sys::SherpaOnnxDestroyOfflineRecognizer(self.recognizer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ModelConfig, RecognizerConfig, WhisperModelConfig};

    fn whisper_config() -> RecognizerConfig {
        RecognizerConfig::new(
            ModelConfig::Whisper(WhisperModelConfig {
                encoder: "sherpa-onnx-whisper-tiny.en/tiny.en-encoder.int8.onnx".into(),
                decoder: "sherpa-onnx-whisper-tiny.en/tiny.en-decoder.int8.onnx".into(),
                ..Default::default()
            }),
            "sherpa-onnx-whisper-tiny.en/tiny.en-tokens.txt",
        )
    }

    fn load_bundle_wav(path: &str) -> AudioSamples {
        let mut reader = hound::WavReader::open(path).unwrap();
        let sample_rate = reader.spec().sample_rate;
        let samples: Vec<f32> = reader
            .samples::<i16>()
            .map(|s| s.unwrap() as f32 / 32768.0)
            .collect();
        AudioSamples {
            samples,
            sample_rate,
        }
    }

    #[test]
    #[ignore = "needs the sherpa-onnx-whisper-tiny.en bundle"]
    fn whisper_end_to_end() {
        let audio = load_bundle_wav("sherpa-onnx-whisper-tiny.en/test_wavs/0.wav");
        let mut recognizer = OfflineRecognizer::new(&whisper_config()).unwrap();
        let transcript = recognizer.decode(&audio).unwrap();
        assert!(!transcript.text.is_empty());
    }

    #[test]
    #[ignore = "needs the sherpa-onnx-whisper-tiny.en bundle"]
    fn decode_is_deterministic_across_instances() {
        let audio = load_bundle_wav("sherpa-onnx-whisper-tiny.en/test_wavs/0.wav");
        let first = OfflineRecognizer::new(&whisper_config())
            .unwrap()
            .decode(&audio)
            .unwrap();
        let second = OfflineRecognizer::new(&whisper_config())
            .unwrap()
            .decode(&audio)
            .unwrap();
        assert_eq!(first.text, second.text);
    }
}
