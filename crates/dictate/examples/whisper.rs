/*
Transcribe a wav file using OpenAI Whisper

wget https://github.com/k2-fsa/sherpa-onnx/releases/download/asr-models/sherpa-onnx-whisper-tiny.en.tar.bz2
tar xvf sherpa-onnx-whisper-tiny.en.tar.bz2

The wav must be mono 32-bit float PCM, e.g.
ffmpeg -i input.wav -ac 1 -ar 16000 -c:a pcm_f32le audio.wav

cargo run --example whisper audio.wav
*/

use dictate_rs::{read_wav, report, ModelConfig, OfflineRecognizer, RecognizerConfig, WhisperModelConfig};
use eyre::Result;

fn main() -> Result<()> {
    let path = std::env::args().nth(1).expect("Missing file path argument");
    let provider = std::env::args().nth(2).unwrap_or("cpu".into());
    let audio = read_wav(&path)?;

    let mut config = RecognizerConfig::new(
        ModelConfig::Whisper(WhisperModelConfig {
            encoder: "./sherpa-onnx-whisper-tiny.en/tiny.en-encoder.int8.onnx".into(),
            decoder: "./sherpa-onnx-whisper-tiny.en/tiny.en-decoder.int8.onnx".into(),
            ..Default::default()
        }),
        "./sherpa-onnx-whisper-tiny.en/tiny.en-tokens.txt",
    );
    config.provider = Some(provider);

    let mut recognizer = OfflineRecognizer::new(&config)?;

    let start_t = std::time::Instant::now();
    let transcript = recognizer.decode(&audio)?;
    report::print(&transcript);
    println!("Time taken for transcription: {:?}", start_t.elapsed());
    Ok(())
}
