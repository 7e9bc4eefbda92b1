//! End-to-end Latin analysis example
//!
//! Builds an analyzer from a JSON configuration and runs a short passage
//! through numeral normalization, numeral conversion and stemming.

use latin_analysis::{AnalysisError, Analyzer, AnalyzerConfig, Token, VecTokenStream, collect_tokens};

const CONFIG: &str = r#"{
    "filters": [
        { "name": "latinNumberNormalization" },
        { "name": "latinNumberConvert", "args": { "strictMode": "true" } },
        { "name": "latinStem" }
    ]
}"#;

fn tokenize(text: &str) -> VecTokenStream {
    let mut tokens = Vec::new();
    let mut offset = 0;
    for word in text.split_whitespace() {
        let start = text[offset..].find(word).map_or(offset, |i| offset + i);
        let end = start + word.len();
        tokens.push(Token::word(word, start, end));
        offset = end;
    }
    VecTokenStream::new(tokens)
}

fn main() -> Result<(), AnalysisError> {
    let config = AnalyzerConfig::from_json_str(CONFIG)?;
    let analyzer = Analyzer::from_config(&config)?;
    println!("Filters: {}", analyzer.filter_names().join(" -> "));

    let passage = "anno CIↃXCIX populusque Romanus legiones Ⅻ misit";
    println!("Input: {passage}\n");

    for token in collect_tokens(analyzer.analyze(tokenize(passage))) {
        println!(
            "{:<12} {:>3}..{:<3} +{} {}",
            token.text,
            token.start_offset,
            token.end_offset,
            token.position_increment,
            token.token_type
        );
    }

    // latinStem takes no arguments
    let bad = AnalyzerConfig::from_json_str(
        r#"{ "filters": [ { "name": "latinStem", "args": { "strictMode": "true" } } ] }"#,
    )?;
    if let Err(err) = Analyzer::from_config(&bad) {
        println!("\nRejected configuration: {err}");
    }

    Ok(())
}
