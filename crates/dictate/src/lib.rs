pub mod audio;
pub mod config;
pub mod recognizer;
pub mod report;

mod error;
mod utils;

pub use audio::{read_wav, AudioSamples};
pub use config::{
    FeatureConfig, ModelConfig, ModelFamily, MoonshineModelConfig, ParaformerModelConfig,
    RecognizerConfig, SenseVoiceModelConfig, WhisperModelConfig,
};
pub use error::{Error, Result};
pub use recognizer::{OfflineRecognizer, Transcript};

pub fn default_provider() -> String {
    // cuda/coreml/directml are flaky across models, stick to cpu
    "cpu".into()
}
