//! Derives a single constraint for a line of symbols.
//!
//! The line's structural characteristics gate a weighted candidate list (one
//! entry per constraint kind), and one candidate is drawn at random. The
//! non-determinism is intentional: regenerating the same line usually yields
//! a different constraint, which is what keeps puzzles varied.

use rand::{
    distributions::{Distribution, WeightedIndex},
    seq::SliceRandom,
    Rng,
};
use tracing::trace;

use crate::{
    analysis::{
        self, adjacent_symbols, longest_palindrome, occurrence_count,
        repeated_substrings_without_overlap, symbols_in_order, unique_symbols, Direction,
    },
    board::Symbol,
    constraint::{Constraint, ConstraintKind, Metadata, Pattern, Token},
};

/// The structural features of a line that gate and weight the candidates.
#[derive(Debug)]
struct Characteristics {
    symbols: Vec<Symbol>,
    runs: Vec<Symbol>,
    longest_palindrome: Vec<Symbol>,
    longest_repeat: Vec<Symbol>,
    longest_repeat_count: usize,
}

impl Characteristics {
    fn of(line: &[Symbol]) -> Self {
        let repeats = repeated_substrings_without_overlap(line);
        let longest_repeat = repeats.into_iter().next().unwrap_or_default();
        let longest_repeat_count = occurrence_count(&longest_repeat, line);
        Self {
            symbols: unique_symbols(line),
            runs: symbols_in_order(line),
            longest_palindrome: longest_palindrome(line),
            longest_repeat,
            longest_repeat_count,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Candidate {
    Repeat,
    Palindrome,
    Order,
    Subset,
    Previous,
    Next,
    Positions,
}

/// Picks and constructs one constraint for the line.
///
/// Longer repeats and palindromes weigh heavier, SYMBOL_POSITIONS is always
/// applicable, so every line (even a single symbol) yields a constraint.
pub fn generate_constraint<R: Rng + ?Sized>(line: &[Symbol], rng: &mut R) -> Constraint {
    let c = Characteristics::of(line);

    let mut candidates: Vec<(Candidate, usize)> = Vec::new();
    if c.longest_repeat.len() >= 2 {
        candidates.push((Candidate::Repeat, c.longest_repeat.len() * 2));
    }
    if c.longest_palindrome.len() >= 4 {
        candidates.push((Candidate::Palindrome, c.longest_palindrome.len()));
    }
    if (2..=3).contains(&c.runs.len()) {
        candidates.push((Candidate::Order, c.runs.len() * 2));
    }
    if c.symbols.len() >= 2 {
        candidates.push((Candidate::Subset, 2));
        candidates.push((Candidate::Previous, 1));
        candidates.push((Candidate::Next, 1));
    }
    candidates.push((Candidate::Positions, 2));

    let weights = WeightedIndex::new(candidates.iter().map(|&(_, weight)| weight))
        .expect("candidate list is non-empty with non-zero weights");
    let choice = candidates[weights.sample(rng)].0;
    trace!(?choice, line = %String::from_iter(line.iter()), "selected constraint kind");

    match choice {
        Candidate::Repeat => longest_repeat_constraint(&c),
        Candidate::Palindrome => palindrome_constraint(&c),
        Candidate::Order => order_constraint(&c),
        Candidate::Subset => subset_constraint(&c, rng),
        Candidate::Previous => adjacent_constraint(line, &c, Direction::Previous, rng),
        Candidate::Next => adjacent_constraint(line, &c, Direction::Next, rng),
        Candidate::Positions => positions_constraint(line, rng),
    }
}

/// Reveals the longest non-overlapping repeat and how often it occurs.
fn longest_repeat_constraint(c: &Characteristics) -> Constraint {
    Constraint::new(
        ConstraintKind::LongestRepeat,
        Pattern::Repeat {
            needle: c.longest_repeat.clone(),
            count: c.longest_repeat_count,
        },
        None,
    )
}

/// Reveals the longest palindrome's length without revealing its symbols.
fn palindrome_constraint(c: &Characteristics) -> Constraint {
    let length = c.longest_palindrome.len();
    Constraint::new(
        ConstraintKind::LongestPalindrome,
        Pattern::Palindrome { length },
        Some(Metadata::Palindrome { length }),
    )
}

/// Reveals the order of the symbol runs.
fn order_constraint(c: &Characteristics) -> Constraint {
    Constraint::new(
        ConstraintKind::SymbolOrder,
        Pattern::Order {
            runs: c.runs.clone(),
        },
        Some(Metadata::Runs {
            symbols: c.runs.clone(),
        }),
    )
}

/// Reveals a random non-empty subset of the unique symbols, unordered.
fn subset_constraint<R: Rng + ?Sized>(c: &Characteristics, rng: &mut R) -> Constraint {
    let count = rng.gen_range(1..=c.symbols.len());
    let subset: Vec<Symbol> = c.symbols.choose_multiple(rng, count).copied().collect();
    let exhaustive = subset.len() == c.symbols.len();
    Constraint::new(
        ConstraintKind::SymbolSubset,
        Pattern::Subset {
            symbols: subset,
            exhaustive,
        },
        None,
    )
}

/// Reveals the symbols adjacent to a random anchor. Anchors that would sit on
/// the closed boundary (the last symbol for NEXT, the first for PREVIOUS) are
/// excluded from the draw.
fn adjacent_constraint<R: Rng + ?Sized>(
    line: &[Symbol],
    c: &Characteristics,
    direction: Direction,
    rng: &mut R,
) -> Constraint {
    let boundary = match direction {
        Direction::Next => line.last(),
        Direction::Previous => line.first(),
    };
    let draft: Vec<Symbol> = c
        .symbols
        .iter()
        .filter(|&s| Some(s) != boundary)
        .copied()
        .collect();
    let anchor = *draft
        .choose(rng)
        .expect("a line with two distinct symbols has a non-boundary symbol");
    let adjacent = adjacent_symbols(anchor, line, direction);

    let kind = match direction {
        Direction::Next => ConstraintKind::NextSymbol,
        Direction::Previous => ConstraintKind::PreviousSymbol,
    };
    Constraint::new(
        kind,
        Pattern::Adjacent {
            anchor,
            allowed: adjacent.clone(),
            direction,
        },
        Some(Metadata::Anchor { anchor, adjacent }),
    )
}

/// Masking probability for each cell of a SYMBOL_POSITIONS constraint.
const CONCEAL_PROBABILITY: f64 = 0.75;

/// Reveals random symbols at their exact positions; concealed stretches merge
/// into a single any-length gap, an isolated concealed cell stays a
/// single-cell wildcard.
fn positions_constraint<R: Rng + ?Sized>(line: &[Symbol], rng: &mut R) -> Constraint {
    let mut tokens: Vec<Token> = Vec::new();
    for &symbol in line {
        let token = if rng.gen::<f64>() < CONCEAL_PROBABILITY {
            Token::Any
        } else {
            Token::Literal(symbol)
        };
        match (tokens.last().copied(), token) {
            (Some(Token::Any | Token::Gap), Token::Any) => {
                *tokens.last_mut().expect("last exists") = Token::Gap;
            }
            _ => tokens.push(token),
        }
    }
    Constraint::new(
        ConstraintKind::SymbolPositions,
        Pattern::Positions {
            tokens: tokens.clone(),
        },
        Some(Metadata::Segments { tokens }),
    )
}
