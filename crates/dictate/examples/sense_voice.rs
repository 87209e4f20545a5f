/*
Transcribe a wav file using SenseVoice (zh, en, ja, ko, yue)

wget https://github.com/k2-fsa/sherpa-onnx/releases/download/asr-models/sherpa-onnx-sense-voice-zh-en-ja-ko-yue-2024-07-17.tar.bz2
tar xvf sherpa-onnx-sense-voice-zh-en-ja-ko-yue-2024-07-17.tar.bz2

cargo run --example sense_voice audio.wav
*/

use dictate_rs::{read_wav, report, ModelConfig, OfflineRecognizer, RecognizerConfig, SenseVoiceModelConfig};
use eyre::Result;

fn main() -> Result<()> {
    let path = std::env::args().nth(1).expect("Missing file path argument");
    let provider = std::env::args().nth(2).unwrap_or("cpu".into());
    let audio = read_wav(&path)?;

    let mut config = RecognizerConfig::new(
        ModelConfig::SenseVoice(SenseVoiceModelConfig {
            model: "./sherpa-onnx-sense-voice-zh-en-ja-ko-yue-2024-07-17/model.int8.onnx".into(),
            ..Default::default()
        }),
        "./sherpa-onnx-sense-voice-zh-en-ja-ko-yue-2024-07-17/tokens.txt",
    );
    config.provider = Some(provider);

    let mut recognizer = OfflineRecognizer::new(&config)?;

    let start_t = std::time::Instant::now();
    let transcript = recognizer.decode(&audio)?;
    report::print(&transcript);
    println!("Time taken for transcription: {:?}", start_t.elapsed());
    Ok(())
}
