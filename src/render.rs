//! Rendering of trie results for the command line.
//!
//! Each renderer writes either human-readable text or a single JSON object
//! per call to any [`Write`] sink.

use std::io::Write;

use serde::Serialize;

use crate::data_structures::{KupuTrie, SpellCheck};
use crate::error::KupuResult;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per command
    Json,
}

#[derive(Serialize)]
struct PrefixReport<'a> {
    prefix: &'a str,
    words: &'a [String],
}

#[derive(Serialize)]
struct SpellReport<'a> {
    word: &'a str,
    correct: bool,
    suggestions: &'a [String],
}

#[derive(Serialize)]
struct SearchReport<'a> {
    word: &'a str,
    found: bool,
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> KupuResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Lists the words completing `prefix`.
pub fn autocomplete<W: Write>(
    out: &mut W,
    trie: &KupuTrie,
    prefix: &str,
    format: OutputFormat,
) -> KupuResult<()> {
    let words = trie.words_with_prefix(prefix);
    tracing::debug!(prefix, count = words.len(), "autocomplete");

    match format {
        OutputFormat::Json => write_json(out, &PrefixReport { prefix, words: &words }),
        OutputFormat::Text => {
            if words.is_empty() {
                writeln!(out, "No words found with prefix '{prefix}'")?;
                return Ok(());
            }
            writeln!(out, "Autocomplete suggestions for '{prefix}':")?;
            for word in &words {
                writeln!(out, "{word}")?;
            }
            Ok(())
        }
    }
}

/// Lists the predicted words for `prefix`.
///
/// Prediction uses the same enumeration as autocomplete; only the heading
/// differs.
pub fn predict<W: Write>(
    out: &mut W,
    trie: &KupuTrie,
    prefix: &str,
    format: OutputFormat,
) -> KupuResult<()> {
    if format == OutputFormat::Text {
        writeln!(out, "Word predictions for '{prefix}':")?;
    }
    autocomplete(out, trie, prefix, format)
}

/// Reports whether `word` is spelled correctly, with corrections if not.
pub fn spell_check<W: Write>(
    out: &mut W,
    trie: &KupuTrie,
    word: &str,
    format: OutputFormat,
) -> KupuResult<()> {
    let result = trie.suggest_corrections(word);
    tracing::debug!(word, correct = result.is_correct(), "spell check");

    match format {
        OutputFormat::Json => write_json(
            out,
            &SpellReport {
                word,
                correct: result.is_correct(),
                suggestions: result.suggestions(),
            },
        ),
        OutputFormat::Text => {
            match &result {
                SpellCheck::Correct => writeln!(out, "'{word}' is spelled correctly")?,
                SpellCheck::Misspelled(suggestions) => {
                    writeln!(out, "'{word}' is misspelled. Possible corrections:")?;
                    for suggestion in suggestions {
                        writeln!(out, "{suggestion}")?;
                    }
                }
            }
            Ok(())
        }
    }
}

/// Reports whether `word` is in the trie.
pub fn search<W: Write>(
    out: &mut W,
    trie: &KupuTrie,
    word: &str,
    format: OutputFormat,
) -> KupuResult<()> {
    let found = trie.contains(word);

    match format {
        OutputFormat::Json => write_json(out, &SearchReport { word, found }),
        OutputFormat::Text => {
            if found {
                writeln!(out, "'{word}' found")?;
            } else {
                writeln!(out, "'{word}' not found")?;
            }
            Ok(())
        }
    }
}

/// Runs the demonstration session: autocomplete, spell check and prediction.
pub fn demo<W: Write>(out: &mut W, trie: &KupuTrie, format: OutputFormat) -> KupuResult<()> {
    if format == OutputFormat::Text {
        writeln!(out, "==== Autocomplete Demo =====")?;
    }
    autocomplete(out, trie, "ca", format)?;

    if format == OutputFormat::Text {
        writeln!(out, "\n==== Spell Checker Demo =====")?;
    }
    spell_check(out, trie, "kat", format)?;

    if format == OutputFormat::Text {
        writeln!(out, "\n==== Word Prediction Demo =====")?;
    }
    predict(out, trie, "ca", format)
}
