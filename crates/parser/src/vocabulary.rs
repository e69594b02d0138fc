use serde::{Deserialize, Serialize};

use movebill_core::{DomainError, DomainResult};

/// Item keywords the parser looks for, in scan order.
///
/// Keywords are stored lowercased. A keyword also matches inflected forms that
/// extend it with word characters ("bett" matches "betten").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    keywords: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary; blank keywords are rejected, duplicates dropped.
    pub fn new<I, S>(keywords: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if keyword.is_empty() {
                return Err(DomainError::validation("vocabulary keyword cannot be empty"));
            }
            if !out.contains(&keyword) {
                out.push(keyword);
            }
        }
        Ok(Self { keywords: out })
    }

    /// German/English furniture nouns.
    pub fn german_english() -> Self {
        let keywords = [
            "bed", "bett", "sofa", "couch", "tisch", "table", "stuhl", "chair", "schrank",
            "wardrobe", "box", "karton", "kommode", "dresser",
        ];
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Derive keywords from price-list names: the first word of each name.
    ///
    /// "Sofa (3-Sitzer)" yields "sofa", "Umzugskarton Standard" yields
    /// "umzugskarton". Names without a leading word are ignored.
    pub fn from_catalog_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut keywords: Vec<String> = Vec::new();
        for name in names {
            let word: String = name
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .chars()
                .take_while(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect();
            if !word.is_empty() && !keywords.contains(&word) {
                keywords.push(word);
            }
        }
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::german_english()
    }
}

impl TryFrom<Vec<String>> for Vocabulary {
    type Error = DomainError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(value: Vocabulary) -> Self {
        value.keywords
    }
}

/// One spelled-out quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumeralWord {
    pub word: String,
    pub value: u32,
}

/// Spelled-out quantities, tried in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NumeralWord>", into = "Vec<NumeralWord>")]
pub struct NumeralTable {
    entries: Vec<NumeralWord>,
}

impl NumeralTable {
    pub fn new(entries: Vec<NumeralWord>) -> DomainResult<Self> {
        let mut out: Vec<NumeralWord> = Vec::with_capacity(entries.len());
        for NumeralWord { word, value } in entries {
            let word = word.trim().to_lowercase();
            if word.is_empty() || word.chars().all(|c| c.is_ascii_digit()) {
                return Err(DomainError::validation(format!(
                    "numeral word {word:?} must contain letters"
                )));
            }
            if value == 0 {
                return Err(DomainError::validation(format!(
                    "numeral word {word:?} must stand for at least 1"
                )));
            }
            if out.iter().any(|e| e.word == word) {
                return Err(DomainError::validation(format!("duplicate numeral word {word:?}")));
            }
            out.push(NumeralWord { word, value });
        }
        Ok(Self { entries: out })
    }

    /// Quantities one to five, German and English, including articles.
    pub fn german_english() -> Self {
        let table: [(&str, u32); 14] = [
            ("ein", 1),
            ("eine", 1),
            ("einen", 1),
            ("one", 1),
            ("a", 1),
            ("an", 1),
            ("zwei", 2),
            ("two", 2),
            ("drei", 3),
            ("three", 3),
            ("vier", 4),
            ("four", 4),
            ("fünf", 5),
            ("five", 5),
        ];
        Self {
            entries: table
                .into_iter()
                .map(|(word, value)| NumeralWord {
                    word: word.to_string(),
                    value,
                })
                .collect(),
        }
    }

    /// Look up a lowercased word.
    pub fn value_of(&self, word: &str) -> Option<u32> {
        self.entries.iter().find(|e| e.word == word).map(|e| e.value)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// Values in table order, parallel to [`NumeralTable::words`].
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|e| e.value)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NumeralTable {
    fn default() -> Self {
        Self::german_english()
    }
}

impl TryFrom<Vec<NumeralWord>> for NumeralTable {
    type Error = DomainError;

    fn try_from(value: Vec<NumeralWord>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NumeralTable> for Vec<NumeralWord> {
    fn from(value: NumeralTable) -> Self {
        value.entries
    }
}
