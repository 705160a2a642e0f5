//! Typed line constraints: the pattern a puzzle reveals about one row or
//! column, plus the structured metadata the deduction rules work from.
//!
//! A [`Pattern`] is a structured matcher rather than a compiled regex; its
//! [`Display`](std::fmt::Display) form renders the classic regex notation
//! (`^.*(ISS).*\1.*$`) for presentation and for distinguishing patterns.
//! Deduction rules never look at the pattern — they read only
//! [`ConstraintKind`] and [`Metadata`], so the matcher representation stays
//! swappable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{analysis::Direction, board::Symbol};

/// The closed set of constraint kinds a generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintKind {
    LongestRepeat,
    LongestPalindrome,
    SymbolOrder,
    SymbolSubset,
    NextSymbol,
    PreviousSymbol,
    SymbolPositions,
}

/// One element of a SYMBOL_POSITIONS token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// A revealed symbol at this position.
    Literal(Symbol),
    /// Exactly one concealed symbol (`.`).
    Any,
    /// A run of zero or more concealed symbols (`.*`).
    Gap,
}

/// Kind-specific structured facts needed for deduction, generated once and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metadata {
    /// SYMBOL_POSITIONS: the revealed/concealed token sequence.
    Segments { tokens: Vec<Token> },
    /// SYMBOL_ORDER: the run symbols in literal order.
    Runs { symbols: Vec<Symbol> },
    /// NEXT_SYMBOL / PREVIOUS_SYMBOL: the anchor and its adjacent set.
    Anchor {
        anchor: Symbol,
        adjacent: Vec<Symbol>,
    },
    /// LONGEST_PALINDROME: the palindrome length.
    Palindrome { length: usize },
}

/// A structured line matcher, one variant per constraint kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern {
    /// `needle` occurs at least `count` times without overlap.
    Repeat { needle: Vec<Symbol>, count: usize },
    /// Some window of `length` cells reads the same in both directions.
    Palindrome { length: usize },
    /// The whole line is the given runs, each repeated one or more times.
    Order { runs: Vec<Symbol> },
    /// At least one symbol of the class occurs; with `exhaustive`, the whole
    /// line is drawn from the class.
    Subset {
        symbols: Vec<Symbol>,
        exhaustive: bool,
    },
    /// Every occurrence of `anchor` is immediately followed (or preceded) by
    /// a member of `allowed`.
    Adjacent {
        anchor: Symbol,
        allowed: Vec<Symbol>,
        direction: Direction,
    },
    /// Revealed symbols in order, with single-cell and any-length gaps.
    Positions { tokens: Vec<Token> },
}

impl Pattern {
    /// Whether the pattern accepts the given fully-known line.
    pub fn matches(&self, line: &[Symbol]) -> bool {
        match self {
            Pattern::Repeat { needle, count } => {
                crate::analysis::occurrence_count(needle, line) >= *count
            }
            Pattern::Palindrome { length } => {
                *length > 0
                    && *length <= line.len()
                    && line.windows(*length).any(is_palindrome)
            }
            Pattern::Order { runs } => matches_runs(runs, line),
            Pattern::Subset { symbols, exhaustive } => {
                if *exhaustive {
                    !line.is_empty() && line.iter().all(|s| symbols.contains(s))
                } else {
                    line.iter().any(|s| symbols.contains(s))
                }
            }
            Pattern::Adjacent {
                anchor,
                allowed,
                direction,
            } => line.iter().enumerate().all(|(i, &s)| {
                if s != *anchor {
                    return true;
                }
                let neighbour = match direction {
                    Direction::Next => line.get(i + 1),
                    Direction::Previous => i.checked_sub(1).and_then(|j| line.get(j)),
                };
                neighbour.is_some_and(|n| allowed.contains(n))
            }),
            Pattern::Positions { tokens } => matches_tokens(tokens, line),
        }
    }

    /// The pattern in regex notation, as a puzzle would present it.
    pub fn source(&self) -> String {
        match self {
            Pattern::Repeat { needle, count } => {
                let needle: String = needle.iter().collect();
                let backrefs = ".*\\1".repeat(count.saturating_sub(1));
                format!("^.*({needle}){backrefs}.*$")
            }
            Pattern::Palindrome { length } => {
                let half = length / 2;
                let captures = "(.)".repeat(half);
                let middle = if length % 2 == 1 { "." } else { "" };
                let mirror: String = (0..half).map(|i| format!("(\\{})", half - i)).collect();
                format!(".*{captures}{middle}{mirror}.*")
            }
            Pattern::Order { runs } => {
                let body: String = runs.iter().map(|s| format!("{s}+")).collect();
                format!("^{body}$")
            }
            Pattern::Subset { symbols, exhaustive } => {
                let class: String = symbols.iter().collect();
                match (symbols.len(), exhaustive) {
                    (1, _) => format!("^.*{class}.*$"),
                    (_, true) => format!("^[{class}]+$"),
                    (_, false) => format!("^.*[{class}]+.*$"),
                }
            }
            Pattern::Adjacent {
                anchor,
                allowed,
                direction,
            } => {
                let pairs: Vec<String> = allowed
                    .iter()
                    .map(|other| match direction {
                        Direction::Next => format!("{anchor}{other}"),
                        Direction::Previous => format!("{other}{anchor}"),
                    })
                    .collect();
                format!("^([^{anchor}]|{})+$", pairs.join("|"))
            }
            Pattern::Positions { tokens } => {
                let body: String = tokens
                    .iter()
                    .map(|t| match t {
                        Token::Literal(s) => s.to_string(),
                        Token::Any => ".".to_string(),
                        Token::Gap => ".*".to_string(),
                    })
                    .collect();
                format!("^{body}$")
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source())
    }
}

fn is_palindrome(window: &[Symbol]) -> bool {
    window.iter().eq(window.iter().rev())
}

/// Greedy run matching; exact because consecutive runs hold distinct symbols.
fn matches_runs(runs: &[Symbol], line: &[Symbol]) -> bool {
    let mut i = 0;
    for &run in runs {
        if line.get(i) != Some(&run) {
            return false;
        }
        while line.get(i) == Some(&run) {
            i += 1;
        }
    }
    i == line.len()
}

fn matches_tokens(tokens: &[Token], line: &[Symbol]) -> bool {
    match tokens.split_first() {
        None => line.is_empty(),
        Some((Token::Literal(s), rest)) => {
            line.first() == Some(s) && matches_tokens(rest, &line[1..])
        }
        Some((Token::Any, rest)) => !line.is_empty() && matches_tokens(rest, &line[1..]),
        Some((Token::Gap, rest)) => (0..=line.len()).any(|k| matches_tokens(rest, &line[k..])),
    }
}

/// A typed constraint attached to exactly one line: the kind, the matcher,
/// and optional structured metadata for deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub pattern: Pattern,
    pub metadata: Option<Metadata>,
}

impl Constraint {
    pub fn new(kind: ConstraintKind, pattern: Pattern, metadata: Option<Metadata>) -> Self {
        Self {
            kind,
            pattern,
            metadata,
        }
    }
}
