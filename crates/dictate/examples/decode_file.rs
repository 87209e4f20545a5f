/*
Decode a single wav file with any of the supported offline models.

wget https://github.com/k2-fsa/sherpa-onnx/releases/download/asr-models/sherpa-onnx-whisper-tiny.en.tar.bz2
tar xvf sherpa-onnx-whisper-tiny.en.tar.bz2

cargo run --example decode_file -- \
  --model-type whisper \
  --whisper-encoder ./sherpa-onnx-whisper-tiny.en/tiny.en-encoder.int8.onnx \
  --whisper-decoder ./sherpa-onnx-whisper-tiny.en/tiny.en-decoder.int8.onnx \
  --tokens ./sherpa-onnx-whisper-tiny.en/tiny.en-tokens.txt \
  ./audio.wav
*/

use clap::Parser;
use dictate_rs::{
    read_wav, report, ModelConfig, ModelFamily, MoonshineModelConfig, OfflineRecognizer,
    ParaformerModelConfig, RecognizerConfig, SenseVoiceModelConfig, WhisperModelConfig,
};
use eyre::{bail, Result};

/// Offline decoding of a single wave file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Mono 32-bit float wav file to transcribe
    wave_file: String,

    /// whisper, paraformer, sense_voice or moonshine
    #[arg(long)]
    model_type: String,

    /// Path to the tokens file
    #[arg(long)]
    tokens: String,

    /// Path to the whisper encoder model
    #[arg(long, default_value = "")]
    whisper_encoder: String,

    /// Path to the whisper decoder model
    #[arg(long, default_value = "")]
    whisper_decoder: String,

    /// Language of the input wave. You can leave it empty
    #[arg(long, default_value = "en")]
    whisper_language: String,

    /// Path to the paraformer model
    #[arg(long, default_value = "")]
    paraformer_model: String,

    /// Path to the SenseVoice model
    #[arg(long, default_value = "")]
    sense_voice_model: String,

    /// If not empty, specify the language for the input wave
    #[arg(long, default_value = "auto")]
    sense_voice_language: String,

    /// Path to the moonshine preprocessor model
    #[arg(long, default_value = "")]
    moonshine_preprocessor: String,

    /// Path to the moonshine encoder model
    #[arg(long, default_value = "")]
    moonshine_encoder: String,

    /// Path to the moonshine uncached decoder model
    #[arg(long, default_value = "")]
    moonshine_uncached_decoder: String,

    /// Path to the moonshine cached decoder model
    #[arg(long, default_value = "")]
    moonshine_cached_decoder: String,

    /// Number of threads for computing
    #[arg(long, default_value = "1")]
    num_threads: i32,

    /// Whether to show engine debug messages
    #[arg(long)]
    debug: bool,

    /// Provider to use
    #[arg(long, default_value = "cpu")]
    provider: String,
}

fn model_config(args: &Args) -> Result<ModelConfig> {
    let family: ModelFamily = args.model_type.parse()?;
    let config = match family {
        ModelFamily::Whisper => {
            if args.whisper_encoder.is_empty() || args.whisper_decoder.is_empty() {
                bail!("whisper needs --whisper-encoder and --whisper-decoder");
            }
            ModelConfig::Whisper(WhisperModelConfig {
                encoder: args.whisper_encoder.clone(),
                decoder: args.whisper_decoder.clone(),
                language: args.whisper_language.clone(),
                ..Default::default()
            })
        }
        ModelFamily::Paraformer => {
            if args.paraformer_model.is_empty() {
                bail!("paraformer needs --paraformer-model");
            }
            ModelConfig::Paraformer(ParaformerModelConfig {
                model: args.paraformer_model.clone(),
            })
        }
        ModelFamily::SenseVoice => {
            if args.sense_voice_model.is_empty() {
                bail!("sense_voice needs --sense-voice-model");
            }
            ModelConfig::SenseVoice(SenseVoiceModelConfig {
                model: args.sense_voice_model.clone(),
                language: args.sense_voice_language.clone(),
                ..Default::default()
            })
        }
        ModelFamily::Moonshine => {
            if args.moonshine_preprocessor.is_empty()
                || args.moonshine_encoder.is_empty()
                || args.moonshine_uncached_decoder.is_empty()
                || args.moonshine_cached_decoder.is_empty()
            {
                bail!(
                    "moonshine needs --moonshine-preprocessor, --moonshine-encoder, \
                     --moonshine-uncached-decoder and --moonshine-cached-decoder"
                );
            }
            ModelConfig::Moonshine(MoonshineModelConfig {
                preprocessor: args.moonshine_preprocessor.clone(),
                encoder: args.moonshine_encoder.clone(),
                uncached_decoder: args.moonshine_uncached_decoder.clone(),
                cached_decoder: args.moonshine_cached_decoder.clone(),
            })
        }
    };
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Reading {}", args.wave_file);
    let audio = read_wav(&args.wave_file)?;

    println!("Initializing recognizer (may take several seconds)");
    let mut config = RecognizerConfig::new(model_config(&args)?, args.tokens.clone());
    config.provider = Some(args.provider.clone());
    config.num_threads = Some(args.num_threads);
    config.debug = args.debug;

    let mut recognizer = OfflineRecognizer::new(&config)?;

    println!("Start decoding!");
    let start_t = std::time::Instant::now();
    let transcript = recognizer.decode(&audio)?;

    report::print(&transcript);
    println!("Wave duration: {} seconds", audio.duration());
    println!("Time taken for transcription: {:?}", start_t.elapsed());
    Ok(())
}
