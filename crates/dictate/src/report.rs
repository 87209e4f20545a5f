use std::fmt::Write as _;

use crate::recognizer::Transcript;

/// Renders a transcript for terminal display: the text always, the
/// timestamp sequence only when the model produced one.
pub fn render(transcript: &Transcript) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", transcript.text);
    if !transcript.timestamps.is_empty() {
        let stamps: Vec<String> = transcript
            .timestamps
            .iter()
            .map(|t| format!("{t:.2}"))
            .collect();
        let _ = writeln!(out, "timestamps: [{}]", stamps.join(", "));
    }
    out
}

pub fn print(transcript: &Transcript) {
    print!("{}", render(transcript));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_text_without_timestamps() {
        let transcript = Transcript {
            text: "hello world".into(),
            ..Default::default()
        };
        let out = render(&transcript);
        assert_eq!(out, "hello world\n");
    }

    #[test]
    fn renders_timestamps_when_present() {
        let transcript = Transcript {
            text: "hello world".into(),
            timestamps: vec![0.0, 0.56, 1.2],
            ..Default::default()
        };
        let out = render(&transcript);
        assert!(out.starts_with("hello world\n"));
        assert!(out.contains("timestamps: [0.00, 0.56, 1.20]"));
    }
}
