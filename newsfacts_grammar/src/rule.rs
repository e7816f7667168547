//! Rule combinators over token sequences.
//!
//! A [`Rule`] is matched at a fixed start position and yields every way it
//! can match there, in priority order: alternatives in declaration order,
//! `repeatable` longest first, `optional` present before absent. Sequences
//! backtrack through those candidates lazily, so the first complete match
//! stops the search.

use newsfacts_core::{Token, Tokenizer};
use std::ops::{ControlFlow, Range};

use crate::fact::Slot;
use crate::predicate::Predicate;

/// One way a rule matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Token range covered by the match.
    pub tokens: Range<usize>,
    /// Interpreted slots and the token ranges they cover.
    pub slots: Vec<(Slot, Range<usize>)>,
}

impl Capture {
    const fn empty(pos: usize) -> Self {
        Self {
            tokens: pos..pos,
            slots: Vec::new(),
        }
    }

    fn extend(&self, next: &Self) -> Self {
        let mut slots = self.slots.clone();
        slots.extend(next.slots.iter().cloned());
        Self {
            tokens: self.tokens.start..next.tokens.end,
            slots,
        }
    }

    /// Token range of the first occurrence of `slot`.
    #[must_use]
    pub fn slot(&self, slot: Slot) -> Option<Range<usize>> {
        self.slots
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, range)| range.clone())
    }
}

#[derive(Debug, Clone)]
pub enum Rule {
    /// A single token satisfying the predicate.
    Token(Predicate),
    /// Any of the normal-form sequences.
    Pipeline(Vec<Vec<String>>),
    Seq(Vec<Self>),
    Or(Vec<Self>),
    Optional(Box<Self>),
    Repeatable(Box<Self>),
    Interpret(Slot, Box<Self>),
}

impl Rule {
    #[must_use]
    pub const fn token(predicate: Predicate) -> Self {
        Self::Token(predicate)
    }

    #[must_use]
    pub const fn seq(items: Vec<Self>) -> Self {
        Self::Seq(items)
    }

    #[must_use]
    pub const fn or(alternatives: Vec<Self>) -> Self {
        Self::Or(alternatives)
    }

    /// Matches any phrase by normal form. Each phrase is tokenized and
    /// normalized with `tokenizer`, so `"родился"` also accepts `"родилась"`
    /// and `"г."` becomes the two-token sequence `г` `.`.
    #[must_use]
    pub fn pipeline(tokenizer: &Tokenizer, phrases: &[&str]) -> Self {
        let mut sequences: Vec<Vec<String>> = Vec::new();
        for phrase in phrases {
            let forms: Vec<String> = tokenizer
                .tokenize(phrase)
                .into_iter()
                .map(|t| t.normal_form)
                .collect();
            if !forms.is_empty() && !sequences.contains(&forms) {
                sequences.push(forms);
            }
        }
        sequences.sort_by_key(|forms| std::cmp::Reverse(forms.len()));
        Self::Pipeline(sequences)
    }

    #[must_use]
    pub fn optional(self) -> Self {
        Self::Optional(Box::new(self))
    }

    #[must_use]
    pub fn repeatable(self) -> Self {
        Self::Repeatable(Box::new(self))
    }

    #[must_use]
    pub fn interpretation(self, slot: Slot) -> Self {
        Self::Interpret(slot, Box::new(self))
    }

    /// Every match starting at `pos`, best first.
    #[must_use]
    pub fn matches(&self, tokens: &[Token], pos: usize) -> Vec<Capture> {
        let mut found = Vec::new();
        let _ = self.visit(tokens, pos, &mut |capture| {
            found.push(capture);
            ControlFlow::Continue(())
        });
        found
    }

    /// Best match starting at `pos` that consumes at least one token.
    /// Candidates after it are never built.
    #[must_use]
    pub fn first_match(&self, tokens: &[Token], pos: usize) -> Option<Capture> {
        let mut best = None;
        let _ = self.visit(tokens, pos, &mut |capture| {
            if capture.tokens.is_empty() {
                ControlFlow::Continue(())
            } else {
                best = Some(capture);
                ControlFlow::Break(())
            }
        });
        best
    }

    /// Feeds each match at `pos` to `on_match` in priority order until it
    /// breaks.
    fn visit(
        &self,
        tokens: &[Token],
        pos: usize,
        on_match: &mut dyn FnMut(Capture) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        match self {
            Self::Token(predicate) => match tokens.get(pos) {
                Some(token) if predicate.test(token) => on_match(Capture {
                    tokens: pos..pos + 1,
                    slots: Vec::new(),
                }),
                _ => ControlFlow::Continue(()),
            },
            Self::Pipeline(sequences) => {
                for forms in sequences {
                    let matched = tokens.get(pos..pos + forms.len()).is_some_and(|window| {
                        window
                            .iter()
                            .zip(forms.iter())
                            .all(|(token, form)| token.normal_form == *form)
                    });
                    if matched {
                        on_match(Capture {
                            tokens: pos..pos + forms.len(),
                            slots: Vec::new(),
                        })?;
                    }
                }
                ControlFlow::Continue(())
            }
            Self::Seq(items) => Self::visit_seq(items, tokens, Capture::empty(pos), on_match),
            Self::Or(alternatives) => {
                for alt in alternatives {
                    alt.visit(tokens, pos, on_match)?;
                }
                ControlFlow::Continue(())
            }
            Self::Optional(inner) => {
                inner.visit(tokens, pos, on_match)?;
                on_match(Capture::empty(pos))
            }
            Self::Repeatable(inner) => {
                for capture in Self::repeat(inner, tokens, pos).into_iter().rev() {
                    on_match(capture)?;
                }
                ControlFlow::Continue(())
            }
            Self::Interpret(slot, inner) => inner.visit(tokens, pos, &mut |mut capture| {
                capture.slots.insert(0, (*slot, capture.tokens.clone()));
                on_match(capture)
            }),
        }
    }

    fn visit_seq(
        items: &[Self],
        tokens: &[Token],
        done: Capture,
        on_match: &mut dyn FnMut(Capture) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        let Some((first, rest)) = items.split_first() else {
            return on_match(done);
        };
        first.visit(tokens, done.tokens.end, &mut |next| {
            Self::visit_seq(rest, tokens, done.extend(&next), on_match)
        })
    }

    /// Prefixes of the run of consecutive `inner` matches, shortest first.
    /// Each repetition takes the best non-empty match of `inner`.
    fn repeat(inner: &Self, tokens: &[Token], pos: usize) -> Vec<Capture> {
        let mut prefixes: Vec<Capture> = Vec::new();
        let mut end = pos;
        while let Some(next) = inner.first_match(tokens, end) {
            end = next.tokens.end;
            let prefix = match prefixes.last() {
                Some(last) => last.extend(&next),
                None => next,
            };
            prefixes.push(prefix);
        }
        prefixes
    }

    /// Leftmost non-overlapping matches over the whole sequence.
    #[must_use]
    pub fn find_all(&self, tokens: &[Token]) -> Vec<Capture> {
        let mut found = Vec::new();
        let mut pos = 0;
        while pos < tokens.len() {
            if let Some(capture) = self.first_match(tokens, pos) {
                pos = capture.tokens.end;
                found.push(capture);
            } else {
                pos += 1;
            }
        }
        found
    }
}
