/*
Transcribe a wav file using Moonshine (English only)

wget https://github.com/k2-fsa/sherpa-onnx/releases/download/asr-models/sherpa-onnx-moonshine-tiny-en-int8.tar.bz2
tar xvf sherpa-onnx-moonshine-tiny-en-int8.tar.bz2
rm sherpa-onnx-moonshine-tiny-en-int8.tar.bz2

cargo run --example moonshine audio.wav
*/

use dictate_rs::{read_wav, report, ModelConfig, MoonshineModelConfig, OfflineRecognizer, RecognizerConfig};
use eyre::Result;

fn main() -> Result<()> {
    let path = std::env::args().nth(1).expect("Missing file path argument");
    let provider = std::env::args().nth(2).unwrap_or("cpu".into());
    let audio = read_wav(&path)?;

    let mut config = RecognizerConfig::new(
        ModelConfig::Moonshine(MoonshineModelConfig {
            preprocessor: "./sherpa-onnx-moonshine-tiny-en-int8/preprocess.onnx".into(),
            encoder: "./sherpa-onnx-moonshine-tiny-en-int8/encode.int8.onnx".into(),
            uncached_decoder: "./sherpa-onnx-moonshine-tiny-en-int8/uncached_decode.int8.onnx".into(),
            cached_decoder: "./sherpa-onnx-moonshine-tiny-en-int8/cached_decode.int8.onnx".into(),
        }),
        "./sherpa-onnx-moonshine-tiny-en-int8/tokens.txt",
    );
    config.provider = Some(provider);

    let mut recognizer = OfflineRecognizer::new(&config)?;

    let start_t = std::time::Instant::now();
    let transcript = recognizer.decode(&audio)?;
    report::print(&transcript);
    println!("Time taken for transcription: {:?}", start_t.elapsed());
    Ok(())
}
