//! CLI command implementations

use std::io::Write;

use anyhow::Result;
use lexiphone_config::OutputFormat;
use lexiphone_core::{
    Dictionary, DictionaryMetadata, LoadStats, PronouncingDictionary, Pronunciation, symbols,
};
use serde::Serialize;

#[derive(Serialize)]
struct LookupResult<'a> {
    word: &'a str,
    pronunciations: Option<&'a [Pronunciation]>,
}

#[derive(Serialize)]
struct StatsReport {
    #[serde(flatten)]
    metadata: DictionaryMetadata,
    parse: LoadStats,
}

pub fn cmd_lookup(
    dict: &PronouncingDictionary,
    words: &[String],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let results: Vec<LookupResult<'_>> = words
        .iter()
        .map(|word| LookupResult {
            word,
            pronunciations: dict.lookup(word),
        })
        .collect();

    let misses = results.iter().filter(|r| r.pronunciations.is_none()).count();
    if misses > 0 {
        tracing::debug!("{misses} of {} words not found", results.len());
    }

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &results)?;
            writeln!(out)?;
        }
        OutputFormat::Plain => {
            for result in &results {
                match result.pronunciations {
                    Some(found) => {
                        for pronunciation in found {
                            writeln!(out, "{}\t{}", result.word, pronunciation)?;
                        }
                    }
                    None => writeln!(out, "{}\t(not found)", result.word)?,
                }
            }
        }
    }
    Ok(())
}

pub fn cmd_stats(
    dict: &PronouncingDictionary,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let report = StatsReport {
        metadata: dict.metadata(),
        parse: dict.stats(),
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Plain => {
            let StatsReport { metadata, parse } = report;
            writeln!(out, "Dictionary:            {}", metadata.name)?;
            writeln!(out, "Words:                 {}", metadata.word_count)?;
            writeln!(out, "Pronunciations:        {}", metadata.pronunciation_count)?;
            writeln!(out, "Ambiguous words:       {}", metadata.ambiguous_count)?;
            writeln!(out, "Lines read:            {}", parse.lines)?;
            writeln!(out, "  skipped:             {}", parse.skipped)?;
            writeln!(out, "  missing separator:   {}", parse.missing_separator)?;
            writeln!(out, "  invalid phonemes:    {}", parse.invalid_pronunciation)?;
            writeln!(out, "  accepted:            {}", parse.accepted)?;
            writeln!(out, "Ambiguous dropped:     {}", parse.ambiguous_dropped)?;
        }
    }
    Ok(())
}

pub fn cmd_symbols(format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, symbols())?;
            writeln!(out)?;
        }
        OutputFormat::Plain => {
            for symbol in symbols() {
                writeln!(out, "{symbol}")?;
            }
        }
    }
    Ok(())
}

/// Fails when any symbol is outside the inventory
pub fn cmd_check(phonemes: &str, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let pronunciation: Pronunciation = phonemes.trim().parse()?;

    match format {
        OutputFormat::Json => {
            let symbols: Vec<&str> = pronunciation.symbols().collect();
            serde_json::to_writer(&mut *out, &symbols)?;
            writeln!(out)?;
        }
        OutputFormat::Plain => {
            writeln!(out, "valid: {} ({} symbols)", pronunciation, pronunciation.len())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use lexiphone_core::{CmuDictLoader, LoadOptions};

    use super::*;

    fn sample() -> PronouncingDictionary {
        CmuDictLoader::load_from_lines(
            [";;; test", "CAT  K A T", "CAT(2)  K A T0", "DOG  D O G"],
            LoadOptions::default(),
        )
    }

    fn run(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_lookup_plain() {
        let dict = sample();
        let words = vec!["cat".to_string(), "emu".to_string()];
        let text = run(|out| cmd_lookup(&dict, &words, OutputFormat::Plain, out));
        assert_eq!(text, "cat\tK A T\ncat\tK A T0\nemu\t(not found)\n");
    }

    #[test]
    fn test_lookup_json_marks_misses_as_null() {
        let dict = sample();
        let words = vec!["dog".to_string(), "emu".to_string()];
        let text = run(|out| cmd_lookup(&dict, &words, OutputFormat::Json, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["word"], "dog");
        assert_eq!(value[0]["pronunciations"][0], "D O G");
        assert!(value[1]["pronunciations"].is_null());
    }

    #[test]
    fn test_stats_json() {
        let dict = sample();
        let text = run(|out| cmd_stats(&dict, OutputFormat::Json, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["word_count"], 2);
        assert_eq!(value["pronunciation_count"], 3);
        assert_eq!(value["ambiguous_count"], 1);
        assert_eq!(value["parse"]["skipped"], 1);
    }

    #[test]
    fn test_stats_plain_mentions_counts() {
        let dict = sample();
        let text = run(|out| cmd_stats(&dict, OutputFormat::Plain, out));
        assert!(text.contains("Words:                 2"));
        assert!(text.contains("Ambiguous words:       1"));
    }

    #[test]
    fn test_symbols_plain_lists_inventory() {
        let text = run(|out| cmd_symbols(OutputFormat::Plain, out));
        let listed: Vec<&str> = text.lines().collect();
        assert_eq!(listed, symbols());
    }

    #[test]
    fn test_check_valid_and_invalid() {
        let text = run(|out| cmd_check("SH O K0", OutputFormat::Plain, out));
        assert_eq!(text, "valid: SH O K0 (3 symbols)\n");

        let mut out: Vec<u8> = Vec::new();
        let err = cmd_check("SH OW1", OutputFormat::Plain, &mut out).unwrap_err();
        assert!(err.to_string().contains("OW1"));
        assert!(out.is_empty());
    }
}
