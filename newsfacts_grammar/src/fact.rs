use newsfacts_core::Token;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::rule::Capture;

/// Fact slot a sub-rule fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Name,
    BirthDate,
    BirthPlace,
}

/// A person's birth record found in text.
///
/// Every field is a verbatim slice of the source sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthFact {
    pub name: String,
    pub birth_date: Option<String>,
    pub birth_place: Option<String>,
}

impl BirthFact {
    /// Interprets a capture. Returns `None` when the name slot is missing or
    /// empty.
    #[must_use]
    pub fn from_capture(text: &str, tokens: &[Token], capture: &Capture) -> Option<Self> {
        let slot_text = |slot| {
            capture
                .slot(slot)
                .and_then(|range| source_span(text, tokens, range))
        };

        let name = slot_text(Slot::Name).filter(|name| !name.is_empty())?;
        Some(Self {
            name,
            birth_date: slot_text(Slot::BirthDate),
            birth_place: slot_text(Slot::BirthPlace),
        })
    }
}

impl std::fmt::Display for BirthFact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | Date: {} | Place: {}",
            self.name,
            self.birth_date.as_deref().unwrap_or("None"),
            self.birth_place.as_deref().unwrap_or("None"),
        )
    }
}

/// Source text from the first token's start to the last token's end.
fn source_span(text: &str, tokens: &[Token], range: Range<usize>) -> Option<String> {
    let first = tokens.get(range.start)?;
    let last = tokens.get(range.end.checked_sub(1)?)?;
    text.get(first.span.start..last.span.end).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_marks_missing_fields() {
        let fact = BirthFact {
            name: "Иван".to_string(),
            birth_date: None,
            birth_place: Some("Москве".to_string()),
        };
        assert_eq!(fact.to_string(), "Иван | Date: None | Place: Москве");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn serializes_as_flat_record() {
        let fact = BirthFact {
            name: "Иван".to_string(),
            birth_date: Some("1980 год".to_string()),
            birth_place: None,
        };
        let json = serde_json::to_string(&fact).expect("fact should serialize");
        assert_eq!(
            json,
            r#"{"name":"Иван","birth_date":"1980 год","birth_place":null}"#
        );
    }
}
