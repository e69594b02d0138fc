use core::str::FromStr;

use serde::{Deserialize, Serialize};

use movebill_core::{DomainError, DomainResult};

/// Minimum digits of the printed sequence (`INV-001`).
const SEQUENCE_WIDTH: usize = 3;

/// Human-facing invoice number: `<prefix>-<zero-padded sequence>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InvoiceNumber {
    prefix: String,
    sequence: u32,
}

impl InvoiceNumber {
    pub fn new(prefix: impl Into<String>, sequence: u32) -> DomainResult<Self> {
        let prefix = prefix.into();
        if prefix.trim().is_empty() || prefix.contains('-') {
            return Err(DomainError::validation(
                "invoice prefix must be non-empty and contain no '-'",
            ));
        }
        if sequence == 0 {
            return Err(DomainError::validation("invoice sequence starts at 1"));
        }
        Ok(Self { prefix, sequence })
    }

    /// First number of a series.
    pub fn first(prefix: impl Into<String>) -> DomainResult<Self> {
        Self::new(prefix, 1)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    pub fn next(&self) -> DomainResult<Self> {
        let sequence = self
            .sequence
            .checked_add(1)
            .ok_or_else(|| DomainError::invariant("invoice sequence exhausted"))?;
        Ok(Self {
            prefix: self.prefix.clone(),
            sequence,
        })
    }

    /// Number following the highest of `existing` in the `prefix` series, or
    /// the first of that series.
    ///
    /// Numbers of other series are ignored (they still have to parse).
    /// Compares sequences numerically, so `INV-1000` follows `INV-999`.
    pub fn next_after<'a, I>(prefix: &str, existing: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut highest: Option<u32> = None;
        for raw in existing {
            let number: InvoiceNumber = raw.parse()?;
            if number.prefix == prefix && highest.is_none_or(|h| number.sequence > h) {
                highest = Some(number.sequence);
            }
        }
        match highest {
            Some(sequence) => Self::new(prefix, sequence)?.next(),
            None => Self::first(prefix),
        }
    }
}

impl core::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-{:0width$}", self.prefix, self.sequence, width = SEQUENCE_WIDTH)
    }
}

impl FromStr for InvoiceNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, digits) = s
            .rsplit_once('-')
            .ok_or_else(|| DomainError::validation(format!("malformed invoice number {s:?}")))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!("malformed invoice number {s:?}")));
        }
        let sequence = digits
            .parse::<u32>()
            .map_err(|e| DomainError::validation(format!("invoice number {s:?}: {e}")))?;
        Self::new(prefix, sequence)
    }
}

impl TryFrom<String> for InvoiceNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InvoiceNumber> for String {
    fn from(value: InvoiceNumber) -> Self {
        value.to_string()
    }
}
