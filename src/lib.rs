//! Regrid generates and solves word-constraint puzzles: a square grid of
//! symbols where every row and column is characterised by a pattern — a
//! regular-expression-like constraint that partially reveals the symbols in
//! that line. Combining the partial information of row and column
//! constraints repeatedly determines the grid.
//!
//! # Core concepts
//!
//! - **[`analysis`]**: pure structural analysis of a line (repeats via a
//!   suffix structure, palindromes, symbol order, adjacency, entropy).
//! - **[`generate`]**: converts a concrete line into one of seven constraint
//!   kinds, drawn from a weighted candidate set so the same line rarely
//!   produces the same constraint twice.
//! - **[`solver`]**: a deterministic deduction engine that consumes only the
//!   constraint sets — never the source grid — and emits an ordered trace of
//!   cell assignments.
//! - **[`puzzle`]**: assembles a random grid, its constraint sets, and the
//!   solution trace into the canonical puzzle definition.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use regrid::board::Board;
//! use regrid::puzzle::{generate_puzzle, LATIN_ALPHABET};
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let puzzle = generate_puzzle(4, true, &LATIN_ALPHABET, &mut rng).unwrap();
//!
//! assert_eq!(puzzle.row_constraints.len(), 4);
//! assert_eq!(puzzle.column_constraints.len(), 4);
//!
//! // The solution trace replays onto an empty board without ever
//! // contradicting the source grid.
//! let replayed = Board::empty(puzzle.size).replay(&puzzle.solution_trace);
//! for a in &puzzle.solution_trace {
//!     assert_eq!(replayed.get(a.row, a.col), Some(puzzle.grid[a.row][a.col]));
//! }
//! ```

pub mod analysis;
pub mod board;
pub mod constraint;
pub mod error;
pub mod generate;
pub mod puzzle;
pub mod solver;
