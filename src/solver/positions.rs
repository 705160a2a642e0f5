//! Deduction for SYMBOL_POSITIONS constraints.
//!
//! Literal tokens before the first gap are anchored to absolute offsets from
//! the line start; literal tokens after the last gap are anchored from the
//! line end. A single token run cannot determine positions across a gap, so
//! interior tokens stay undetermined.

use crate::{
    board::Symbol,
    constraint::{Constraint, ConstraintKind, Metadata, Token},
};

pub(crate) fn deduce(constraint: &Constraint, size: usize) -> Vec<(usize, Symbol)> {
    if constraint.kind != ConstraintKind::SymbolPositions {
        return Vec::new();
    }
    let Some(Metadata::Segments { tokens }) = &constraint.metadata else {
        return Vec::new();
    };
    anchored_positions(tokens, size)
}

fn anchored_positions(tokens: &[Token], size: usize) -> Vec<(usize, Symbol)> {
    let mut entries: Vec<(usize, Token)> = Vec::new();

    for (offset, &token) in tokens.iter().enumerate() {
        if token == Token::Gap {
            break;
        }
        entries.push((offset, token));
    }
    for (offset, &token) in tokens.iter().rev().enumerate() {
        if token == Token::Gap {
            break;
        }
        // Guards malformed metadata with more tokens than cells.
        let Some(position) = size.checked_sub(offset + 1) else {
            break;
        };
        entries.push((position, token));
    }

    entries.sort_by_key(|&(position, _)| position);
    entries.dedup();
    entries
        .into_iter()
        .filter_map(|(position, token)| match token {
            Token::Literal(symbol) => Some((position, symbol)),
            Token::Any | Token::Gap => None,
        })
        .collect()
}
