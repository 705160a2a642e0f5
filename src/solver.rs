//! Deterministic constraint-propagation solver.
//!
//! Consumes only the row/column constraint sets and the grid size — never
//! the source grid — and produces an ordered assignment trace. The solve is
//! one fixed left-to-right pass over the deduction rules:
//!
//! positions (rows, then columns), order, next-symbol, previous-symbol,
//! palindrome — each rule sweeping every line index of its dimension.
//!
//! Later rules in the pass consume assignments made by earlier ones: each
//! step replays the trace so far onto an empty board and reads the current
//! partial line from it. Convergence is reached within the single pass for
//! puzzles produced by this crate's generator; the trace is fully
//! deterministic for a fixed constraint set.
//!
//! SYMBOL_SUBSET and LONGEST_REPEAT constraints deliberately leak only
//! non-positional information and are not solved by any rule. A constraint
//! whose kind and metadata do not line up is treated as "nothing deducible",
//! never as an error.

pub mod adjacent;
pub mod order;
pub mod palindrome;
pub mod positions;

use std::collections::HashSet;

use tracing::debug;

use crate::{
    analysis::Direction,
    board::{Assignment, Board, Cell, Dim, Symbol},
    constraint::Constraint,
};

#[derive(Debug, Clone, Copy)]
enum Rule {
    Positions,
    Order,
    Next,
    Previous,
    Palindrome,
}

const PASS: [Rule; 5] = [
    Rule::Positions,
    Rule::Order,
    Rule::Next,
    Rule::Previous,
    Rule::Palindrome,
];

/// Solves a constraint set from scratch. The result is the ordered,
/// deduplicated trace of every cell fact the deduction rules discover.
pub fn solve(rows: &[Constraint], cols: &[Constraint], size: usize) -> Vec<Assignment> {
    solve_with_partial(rows, cols, size, Vec::new())
}

/// Solves on top of an existing partial trace (e.g. cells a player has
/// already filled in); the partial assignments are kept at the head of the
/// returned trace and inform every deduction.
pub fn solve_with_partial(
    rows: &[Constraint],
    cols: &[Constraint],
    size: usize,
    partial: Vec<Assignment>,
) -> Vec<Assignment> {
    let mut trace = partial;
    let mut seen: HashSet<Assignment> = trace.iter().cloned().collect();
    let empty = Board::empty(size);

    for rule in PASS {
        for dim in [Dim::Row, Dim::Col] {
            for index in 0..size {
                let constraint = match dim {
                    Dim::Row => rows.get(index),
                    Dim::Col => cols.get(index),
                };
                let Some(constraint) = constraint else {
                    continue;
                };

                let line = empty.replay(&trace).line(dim, index);
                let deduced = apply_rule(rule, constraint, &line, size);

                let mut fresh = 0;
                for (position, value) in deduced {
                    let assignment = Assignment::on_line(dim, index, position, value);
                    if seen.insert(assignment.clone()) {
                        trace.push(assignment);
                        fresh += 1;
                    }
                }
                if fresh > 0 {
                    debug!(?rule, ?dim, index, fresh, "deduced new assignments");
                }
            }
        }
    }

    trace
}

fn apply_rule(
    rule: Rule,
    constraint: &Constraint,
    line: &[Cell],
    size: usize,
) -> Vec<(usize, Symbol)> {
    match rule {
        Rule::Positions => positions::deduce(constraint, size),
        Rule::Order => order::deduce(constraint, line),
        Rule::Next => adjacent::deduce(constraint, line, Direction::Next),
        Rule::Previous => adjacent::deduce(constraint, line, Direction::Previous),
        Rule::Palindrome => palindrome::deduce(constraint, line),
    }
}

/// Collects the known cells of a partial line as `(position, symbol)` pairs.
/// Rules re-emit already-known cells; the composition deduplicates them
/// against the running trace.
pub(crate) fn known_cells(line: &[Cell]) -> Vec<(usize, Symbol)> {
    line.iter()
        .enumerate()
        .filter_map(|(i, cell)| cell.map(|s| (i, s)))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::constraint::{ConstraintKind, Metadata, Pattern, Token};

    fn positions_constraint(tokens: Vec<Token>) -> Constraint {
        Constraint::new(
            ConstraintKind::SymbolPositions,
            Pattern::Positions {
                tokens: tokens.clone(),
            },
            Some(Metadata::Segments { tokens }),
        )
    }

    fn order_constraint(runs: &str) -> Constraint {
        let runs: Vec<Symbol> = runs.chars().collect();
        Constraint::new(
            ConstraintKind::SymbolOrder,
            Pattern::Order { runs: runs.clone() },
            Some(Metadata::Runs { symbols: runs }),
        )
    }

    fn anchor_constraint(kind: ConstraintKind, anchor: Symbol, adjacent: &str) -> Constraint {
        let adjacent: Vec<Symbol> = adjacent.chars().collect();
        let direction = match kind {
            ConstraintKind::NextSymbol => Direction::Next,
            _ => Direction::Previous,
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

    #[test]
    fn solves_a_positional_puzzle_in_trace_order() {
        use Token::{Any, Gap, Literal};
        let rows = vec![
            positions_constraint(vec![Literal('A'), Any]),
            positions_constraint(vec![Gap, Literal('D')]),
        ];
        let cols = vec![
            positions_constraint(vec![Any, Literal('C')]),
            positions_constraint(vec![Literal('B'), Gap]),
        ];

        let trace = solve(&rows, &cols, 2);
        assert_eq!(
            trace,
            vec![
                Assignment::new(0, 0, 'A'),
                Assignment::new(1, 1, 'D'),
                Assignment::new(1, 0, 'C'),
                Assignment::new(0, 1, 'B'),
            ]
        );
    }

    #[test]
    fn solves_an_order_puzzle_in_trace_order() {
        let rows = vec![order_constraint("AB"), order_constraint("CD")];
        let cols = vec![order_constraint("AC"), order_constraint("BD")];

        let trace = solve(&rows, &cols, 2);
        assert_eq!(
            trace,
            vec![
                Assignment::new(0, 0, 'A'),
                Assignment::new(0, 1, 'B'),
                Assignment::new(1, 0, 'C'),
                Assignment::new(1, 1, 'D'),
            ]
        );
    }

    #[test]
    fn anchored_constraints_extend_a_partial_trace() {
        let rows = vec![
            anchor_constraint(ConstraintKind::NextSymbol, 'A', "B"),
            anchor_constraint(ConstraintKind::PreviousSymbol, 'D', "C"),
        ];

        let trace = solve_with_partial(
            &rows,
            &[],
            2,
            vec![Assignment::new(0, 0, 'A'), Assignment::new(1, 1, 'D')],
        );
        assert_eq!(
            trace,
            vec![
                Assignment::new(0, 0, 'A'),
                Assignment::new(1, 1, 'D'),
                Assignment::new(0, 1, 'B'),
                Assignment::new(1, 0, 'C'),
            ]
        );
    }

    #[test]
    fn solving_twice_yields_the_same_trace() {
        let rows = vec![order_constraint("AB"), order_constraint("CD")];
        let cols = vec![order_constraint("AC"), order_constraint("BD")];

        assert_eq!(solve(&rows, &cols, 2), solve(&rows, &cols, 2));
    }

    #[test]
    fn unsolvable_kinds_and_malformed_constraints_contribute_nothing() {
        let rows = vec![
            Constraint::new(
                ConstraintKind::LongestRepeat,
                Pattern::Repeat {
                    needle: vec!['A'],
                    count: 2,
                },
                None,
            ),
            // Kind/metadata mismatch must degrade to "no deduction".
            Constraint::new(
                ConstraintKind::SymbolOrder,
                Pattern::Order { runs: vec!['A'] },
                Some(Metadata::Palindrome { length: 2 }),
            ),
        ];

        assert_eq!(solve(&rows, &[], 2), Vec::<Assignment>::new());
    }
}
