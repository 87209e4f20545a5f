use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The model architectures the offline recognizer can load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    Whisper,
    Paraformer,
    SenseVoice,
    Moonshine,
}

impl ModelFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFamily::Whisper => "whisper",
            ModelFamily::Paraformer => "paraformer",
            ModelFamily::SenseVoice => "sense_voice",
            ModelFamily::Moonshine => "moonshine",
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "whisper" => Ok(ModelFamily::Whisper),
            "paraformer" => Ok(ModelFamily::Paraformer),
            "sense_voice" => Ok(ModelFamily::SenseVoice),
            "moonshine" => Ok(ModelFamily::Moonshine),
            other => Err(Error::UnsupportedModel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WhisperModelConfig {
    pub encoder: String,
    pub decoder: String,
    pub language: String,
    /// transcribe or translate
    pub task: String,
    pub tail_paddings: i32,
}

impl Default for WhisperModelConfig {
    fn default() -> Self {
        Self {
            encoder: String::new(),
            decoder: String::new(),
            language: "en".into(),
            task: "transcribe".into(),
            tail_paddings: -1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParaformerModelConfig {
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct SenseVoiceModelConfig {
    pub model: String,
    pub language: String,
    pub use_inverse_text_normalization: bool,
}

impl Default for SenseVoiceModelConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            language: "auto".into(),
            use_inverse_text_normalization: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoonshineModelConfig {
    pub preprocessor: String,
    pub encoder: String,
    pub uncached_decoder: String,
    pub cached_decoder: String,
}

/// Family-tagged model configuration.
///
/// Exactly one family's artifact paths exist per instance; the engine only
/// ever sees the selected variant.
#[derive(Debug, Clone)]
pub enum ModelConfig {
    Whisper(WhisperModelConfig),
    Paraformer(ParaformerModelConfig),
    SenseVoice(SenseVoiceModelConfig),
    Moonshine(MoonshineModelConfig),
}

impl ModelConfig {
    pub fn family(&self) -> ModelFamily {
        match self {
            ModelConfig::Whisper(_) => ModelFamily::Whisper,
            ModelConfig::Paraformer(_) => ModelFamily::Paraformer,
            ModelConfig::SenseVoice(_) => ModelFamily::SenseVoice,
            ModelConfig::Moonshine(_) => ModelFamily::Moonshine,
        }
    }
}

/// Configuration for the feature extractor.
#[derive(Debug, Clone, Copy)]
pub struct FeatureConfig {
    /// Sample rate expected by the model. It is 16000 for all
    /// pre-trained bundles.
    pub sample_rate: i32,
    /// Feature dimension expected by the model. It is 80 for all
    /// pre-trained bundles.
    pub feature_dim: i32,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            sample_rate: 16000,
            feature_dim: 80,
        }
    }
}

/// Everything the engine needs to load one offline recognizer.
///
/// Immutable once a recognizer has been constructed from it. No file
/// existence checks happen here; missing or corrupt artifacts surface as
/// [`crate::Error::RecognizerInit`] at construction time.
#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    pub feat: FeatureConfig,
    pub model: ModelConfig,
    /// Path to tokens.txt, shared by every family.
    pub tokens: String,
    /// cpu, cuda or coreml. Defaults to [`crate::default_provider`].
    pub provider: Option<String>,
    pub num_threads: Option<i32>,
    /// Have the engine print model meta information while loading.
    pub debug: bool,
    /// greedy_search or modified_beam_search
    pub decoding_method: String,
}

impl RecognizerConfig {
    pub fn new(model: ModelConfig, tokens: impl Into<String>) -> Self {
        Self {
            feat: FeatureConfig::default(),
            model,
            tokens: tokens.into(),
            provider: None,
            num_threads: Some(1),
            debug: false,
            decoding_method: "greedy_search".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_supported_families() {
        assert_eq!("whisper".parse::<ModelFamily>().unwrap(), ModelFamily::Whisper);
        assert_eq!(
            "paraformer".parse::<ModelFamily>().unwrap(),
            ModelFamily::Paraformer
        );
        assert_eq!(
            "sense_voice".parse::<ModelFamily>().unwrap(),
            ModelFamily::SenseVoice
        );
        assert_eq!(
            "moonshine".parse::<ModelFamily>().unwrap(),
            ModelFamily::Moonshine
        );
    }

    #[test]
    fn rejects_unknown_family() {
        let err = "unknown".parse::<ModelFamily>().unwrap_err();
        match err {
            Error::UnsupportedModel(name) => assert_eq!(name, "unknown"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn display_round_trips() {
        for id in ["whisper", "paraformer", "sense_voice", "moonshine"] {
            let family: ModelFamily = id.parse().unwrap();
            assert_eq!(family.to_string(), id);
        }
    }

    #[test]
    fn model_config_reports_its_family() {
        let configs = [
            ModelConfig::Whisper(WhisperModelConfig::default()),
            ModelConfig::Paraformer(ParaformerModelConfig::default()),
            ModelConfig::SenseVoice(SenseVoiceModelConfig::default()),
            ModelConfig::Moonshine(MoonshineModelConfig::default()),
        ];
        let families = [
            ModelFamily::Whisper,
            ModelFamily::Paraformer,
            ModelFamily::SenseVoice,
            ModelFamily::Moonshine,
        ];
        for (config, family) in configs.iter().zip(families) {
            assert_eq!(config.family(), family);
        }
    }

    #[test]
    fn family_defaults() {
        let whisper = WhisperModelConfig::default();
        assert_eq!(whisper.language, "en");
        assert_eq!(whisper.task, "transcribe");

        let sense_voice = SenseVoiceModelConfig::default();
        assert_eq!(sense_voice.language, "auto");
        assert!(sense_voice.use_inverse_text_normalization);
    }

    #[test]
    fn recognizer_config_defaults() {
        let config = RecognizerConfig::new(
            ModelConfig::Paraformer(ParaformerModelConfig {
                model: "model.int8.onnx".into(),
            }),
            "tokens.txt",
        );
        assert_eq!(config.feat.sample_rate, 16000);
        assert_eq!(config.feat.feature_dim, 80);
        assert_eq!(config.decoding_method, "greedy_search");
        assert_eq!(config.num_threads, Some(1));
        assert!(!config.debug);
        assert_eq!(config.model.family(), ModelFamily::Paraformer);
    }
}
