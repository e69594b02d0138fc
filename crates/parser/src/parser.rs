use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use movebill_core::{DomainError, DomainResult, ValueObject};

use crate::vocabulary::{NumeralTable, Vocabulary};

/// Confidence attached to a match with an explicit quantity.
pub const EXPLICIT_QUANTITY_CONFIDENCE: f64 = 0.9;

/// One recognized `(item, quantity)` mention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMatch {
    /// The matched input substring, original casing.
    pub original_text: String,
    /// Vocabulary keyword that matched.
    pub matched_name: String,
    pub quantity: u32,
    pub confidence: f64,
    /// Byte offset of `original_text` in the input.
    pub offset: usize,
}

impl ValueObject for ParsedMatch {}

/// Order of the returned matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOrder {
    /// Grouped by keyword, in vocabulary order; text order within a keyword.
    #[default]
    Vocabulary,
    /// Left to right through the input.
    TextPosition,
}

#[derive(Debug, Clone)]
struct KeywordPattern {
    keyword: String,
    regex: Regex,
}

/// Extracts `(item, quantity)` pairs from free-text move descriptions.
///
/// For every keyword the whole text is scanned for
/// `<quantity> [x|mal] <keyword><word chars>`, case-insensitively. Quantities
/// are ASCII digit runs or words from the numeral table. Mentions without a
/// quantity token are not reported.
#[derive(Debug, Clone)]
pub struct QuantityTextParser {
    patterns: Vec<KeywordPattern>,
    numerals: NumeralTable,
    order: MatchOrder,
}

impl QuantityTextParser {
    pub fn new(vocabulary: Vocabulary, numerals: NumeralTable) -> DomainResult<Self> {
        // Group 1 is a digit run, group `i + 2` the i-th numeral word.
        let mut quantity = String::from("([0-9]+)");
        for word in numerals.words() {
            quantity.push_str("|(");
            quantity.push_str(&regex::escape(word));
            quantity.push(')');
        }

        let patterns = vocabulary
            .keywords()
            .iter()
            .map(|keyword| {
                let pattern = format!(
                    r"(?i)(?:{quantity})\s*(?:x|mal)?\s*{}\w*",
                    regex::escape(keyword)
                );
                let regex = Regex::new(&pattern).map_err(|e| {
                    DomainError::validation(format!("keyword {keyword:?}: {e}"))
                })?;
                Ok(KeywordPattern {
                    keyword: keyword.clone(),
                    regex,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self {
            patterns,
            numerals,
            order: MatchOrder::default(),
        })
    }

    /// Parser with the built-in German/English tables.
    pub fn german_english() -> DomainResult<Self> {
        Self::new(Vocabulary::german_english(), NumeralTable::german_english())
    }

    pub fn with_order(mut self, order: MatchOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> MatchOrder {
        self.order
    }

    /// Never fails: text without recognizable mentions yields an empty list.
    pub fn parse(&self, text: &str) -> Vec<ParsedMatch> {
        let mut results = Vec::new();

        for pattern in &self.patterns {
            for caps in pattern.regex.captures_iter(text) {
                let Some(whole) = caps.get(0) else {
                    continue;
                };
                let Some(quantity) = self.resolve_quantity(&caps) else {
                    continue;
                };
                results.push(ParsedMatch {
                    original_text: whole.as_str().to_string(),
                    matched_name: pattern.keyword.clone(),
                    quantity,
                    confidence: EXPLICIT_QUANTITY_CONFIDENCE,
                    offset: whole.start(),
                });
            }
        }

        if self.order == MatchOrder::TextPosition {
            results.sort_by_key(|m| m.offset);
        }

        tracing::debug!(matches = results.len(), "parsed move description");
        results
    }

    /// Zero and out-of-range digit runs resolve to nothing.
    ///
    /// Numeral words are identified by the alternative that matched, so any
    /// spelling the case-insensitive pattern accepts resolves to its value.
    fn resolve_quantity(&self, caps: &Captures<'_>) -> Option<u32> {
        if let Some(digits) = caps.get(1) {
            return digits.as_str().parse::<u32>().ok().filter(|q| *q >= 1);
        }
        self.numerals
            .values()
            .enumerate()
            .find(|(i, _)| caps.get(i + 2).is_some())
            .map(|(_, value)| value)
    }
}
