//! Deduction for SYMBOL_ORDER constraints.
//!
//! The first and last cells always align with the first and last run symbol.
//! Interior unknowns are filled from the currently known partial line: a gap
//! bounded by the same symbol on both sides takes that symbol, and a
//! single-cell gap between symbols two apart in the run order takes the run
//! symbol between them. The fill runs exactly twice so a first-pass fill can
//! enable a second-pass one.
//!
//! When any run symbol occurs more than once in the order, interior filling
//! is skipped entirely — the positional reasoning is ambiguous in that case
//! and known to misfire, so only the first/last cells are assigned.

use crate::{
    board::{Cell, Symbol},
    constraint::{Constraint, ConstraintKind, Metadata},
};

pub(crate) fn deduce(constraint: &Constraint, line: &[Cell]) -> Vec<(usize, Symbol)> {
    if constraint.kind != ConstraintKind::SymbolOrder {
        return Vec::new();
    }
    let Some(Metadata::Runs { symbols: runs }) = &constraint.metadata else {
        return Vec::new();
    };
    if runs.is_empty() || line.is_empty() {
        return Vec::new();
    }

    let ambiguous = runs
        .iter()
        .any(|s| runs.iter().filter(|&r| r == s).count() > 1);

    // Two fixed passes: gaps filled by the first pass let the second fill
    // their neighbours.
    let once = fill_blanks(line, runs, ambiguous);
    let twice = fill_blanks(&once, runs, ambiguous);
    crate::solver::known_cells(&twice)
}

fn fill_blanks(word: &[Cell], runs: &[Symbol], ambiguous: bool) -> Vec<Cell> {
    let last = word.len() - 1;
    word.iter()
        .enumerate()
        .map(|(i, &cell)| {
            if cell.is_some() {
                return cell;
            }
            // The closed ends align with the first and last run.
            if i == 0 {
                return runs.first().copied();
            }
            if i == last {
                return runs.last().copied();
            }
            if ambiguous {
                return None;
            }

            let left = seek_known(word, i, Seek::Left);
            let right = seek_known(word, i, Seek::Right);

            // A gap walled in by the same symbol belongs to that run.
            if left.is_some() && left == right {
                return left;
            }

            // A one-cell gap between symbols two apart in the run order takes
            // the run symbol between them. Positions are first occurrences.
            let position_left = first_position(word, left);
            let position_right = first_position(word, right);
            let order_left = first_position_in_runs(runs, left);
            let order_right = first_position_in_runs(runs, right);
            if order_right - order_left == 2 && position_right - position_left == 2 {
                return runs.get((order_left + 1) as usize).copied();
            }

            None
        })
        .collect()
}

#[derive(Clone, Copy)]
enum Seek {
    Left,
    Right,
}

/// The nearest known symbol strictly before/after `from`.
fn seek_known(word: &[Cell], from: usize, direction: Seek) -> Cell {
    match direction {
        Seek::Left => (0..from).rev().find_map(|i| word[i]),
        Seek::Right => (from + 1..word.len()).find_map(|i| word[i]),
    }
}

fn first_position(word: &[Cell], symbol: Cell) -> i64 {
    symbol
        .and_then(|s| word.iter().position(|&cell| cell == Some(s)))
        .map_or(-1, |i| i as i64)
}

fn first_position_in_runs(runs: &[Symbol], symbol: Cell) -> i64 {
    symbol
        .and_then(|s| runs.iter().position(|&r| r == s))
        .map_or(-1, |i| i as i64)
}
