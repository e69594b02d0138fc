//! Free-text quantity extraction for move descriptions.
//!
//! Turns sentences like "2 Betten und ein Sofa" into `(item, quantity)` pairs
//! using an injected keyword vocabulary and numeral table.

pub mod parser;
pub mod vocabulary;

pub use parser::{EXPLICIT_QUANTITY_CONFIDENCE, MatchOrder, ParsedMatch, QuantityTextParser};
pub use vocabulary::{NumeralTable, NumeralWord, Vocabulary};
