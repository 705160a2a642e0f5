//! Deduction for NEXT_SYMBOL and PREVIOUS_SYMBOL constraints.
//!
//! Only actionable when the adjacent set has exactly one member: then every
//! occurrence of the anchor in the currently known partial line pins down
//! its neighbour. A larger adjacent set narrows nothing positionally.

use crate::{
    analysis::Direction,
    board::{Cell, Symbol},
    constraint::{Constraint, ConstraintKind, Metadata},
};

pub(crate) fn deduce(
    constraint: &Constraint,
    line: &[Cell],
    direction: Direction,
) -> Vec<(usize, Symbol)> {
    let expected_kind = match direction {
        Direction::Next => ConstraintKind::NextSymbol,
        Direction::Previous => ConstraintKind::PreviousSymbol,
    };
    if constraint.kind != expected_kind {
        return Vec::new();
    }
    let Some(Metadata::Anchor { anchor, adjacent }) = &constraint.metadata else {
        return Vec::new();
    };
    let [only] = adjacent.as_slice() else {
        return Vec::new();
    };

    let resolved: Vec<Cell> = line
        .iter()
        .enumerate()
        .map(|(i, &cell)| {
            let neighbour = match direction {
                Direction::Next => i.checked_sub(1).and_then(|j| line.get(j)),
                Direction::Previous => line.get(i + 1),
            };
            if neighbour == Some(&Some(*anchor)) {
                Some(*only)
            } else {
                cell
            }
        })
        .collect();
    crate::solver::known_cells(&resolved)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::constraint::Pattern;

    fn constraint(kind: ConstraintKind, anchor: Symbol, adjacent: &str) -> Constraint {
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

    fn line(cells: &str) -> Vec<Cell> {
        cells
            .chars()
            .map(|c| if c == '_' { None } else { Some(c) })
            .collect()
    }

    #[test]
    fn a_unique_next_symbol_fills_the_cell_after_each_anchor() {
        let c = constraint(ConstraintKind::NextSymbol, 'A', "B");
        assert_eq!(deduce(&c, &line("__A__"), Direction::Next), vec![(2, 'A'), (3, 'B')]);
    }

    #[test]
    fn a_unique_previous_symbol_fills_the_cell_before_each_anchor() {
        let c = constraint(ConstraintKind::PreviousSymbol, 'A', "B");
        assert_eq!(
            deduce(&c, &line("__A__"), Direction::Previous),
            vec![(1, 'B'), (2, 'A')]
        );
    }

    #[test]
    fn ambiguous_adjacent_sets_deduce_nothing() {
        let c = constraint(ConstraintKind::NextSymbol, 'A', "BC");
        assert_eq!(deduce(&c, &line("__A__"), Direction::Next), Vec::new());
    }

    #[test]
    fn direction_mismatch_deduces_nothing() {
        let c = constraint(ConstraintKind::PreviousSymbol, 'A', "B");
        assert_eq!(deduce(&c, &line("__A__"), Direction::Next), Vec::new());
    }
}
