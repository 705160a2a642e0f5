//! Deduction for LONGEST_PALINDROME constraints.
//!
//! Only a palindrome spanning the entire line pins mirrored cells to exact
//! positions: cell `i` and cell `len-1-i` must agree, so whichever side is
//! known propagates to the other. Shorter palindromes float anywhere in the
//! line and are skipped.

use crate::{
    board::{Cell, Symbol},
    constraint::{Constraint, ConstraintKind, Metadata},
};

pub(crate) fn deduce(constraint: &Constraint, line: &[Cell]) -> Vec<(usize, Symbol)> {
    if constraint.kind != ConstraintKind::LongestPalindrome {
        return Vec::new();
    }
    let Some(Metadata::Palindrome { length }) = &constraint.metadata else {
        return Vec::new();
    };
    if *length < line.len() {
        return Vec::new();
    }

    let mirrored: Vec<Cell> = line
        .iter()
        .zip(line.iter().rev())
        .map(|(&a, &b)| a.or(b))
        .collect();
    crate::solver::known_cells(&mirrored)
}
