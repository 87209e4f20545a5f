use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can fail between a model directory and a transcript.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown model family `{0}`, expected whisper, paraformer, sense_voice or moonshine")]
    UnsupportedModel(String),

    #[error("cannot read audio file `{path}`: {reason}")]
    UnreadableAudio { path: PathBuf, reason: String },

    #[error("recognizer initialization failed: {0}")]
    RecognizerInit(String),

    #[error("decode failed: {0}")]
    Decode(String),
}
