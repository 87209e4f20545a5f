/*
Transcribe a wav file using Paraformer (Chinese)

wget https://github.com/k2-fsa/sherpa-onnx/releases/download/asr-models/sherpa-onnx-paraformer-zh-2023-09-14.tar.bz2
tar xvf sherpa-onnx-paraformer-zh-2023-09-14.tar.bz2

cargo run --example paraformer audio.wav
*/

use dictate_rs::{read_wav, report, ModelConfig, OfflineRecognizer, ParaformerModelConfig, RecognizerConfig};
use eyre::Result;

fn main() -> Result<()> {
    let path = std::env::args().nth(1).expect("Missing file path argument");
    let provider = std::env::args().nth(2).unwrap_or("cpu".into());
    let audio = read_wav(&path)?;

    let mut config = RecognizerConfig::new(
        ModelConfig::Paraformer(ParaformerModelConfig {
            model: "./sherpa-onnx-paraformer-zh-2023-09-14/model.int8.onnx".into(),
        }),
        "./sherpa-onnx-paraformer-zh-2023-09-14/tokens.txt",
    );
    config.provider = Some(provider);

    let mut recognizer = OfflineRecognizer::new(&config)?;

    let start_t = std::time::Instant::now();
    let transcript = recognizer.decode(&audio)?;
    report::print(&transcript);
    println!("Time taken for transcription: {:?}", start_t.elapsed());
    Ok(())
}
