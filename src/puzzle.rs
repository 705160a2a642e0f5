//! Puzzle assembly: builds a random source grid, derives one constraint per
//! row and per column, and packages the canonical puzzle definition together
//! with the solver's trace over those constraints.

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    analysis::{shannon_entropy, unique_symbols},
    board::{Assignment, Board, Symbol},
    constraint::Constraint,
    error::{Error, Result},
    generate::generate_constraint,
    solver,
};

/// The default symbol alphabet.
pub const LATIN_ALPHABET: [Symbol; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Standard deviation of the weighted symbol pool.
const POOL_STDEV: f64 = 8.0;

/// A complete generated puzzle: the fully-known source grid, one constraint
/// per row and per column, and the solver's assignment trace over those
/// constraints (provided so a caller can offer progressive hints without
/// recomputation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    pub grid: Vec<Vec<Symbol>>,
    pub row_constraints: Vec<Constraint>,
    pub column_constraints: Vec<Constraint>,
    pub size: usize,
    pub solution_trace: Vec<Assignment>,
    /// Shannon entropy of the whole grid, a rough difficulty signal.
    pub entropy: f64,
}

impl Puzzle {
    /// Whether replaying the solution trace reconstructs every cell. The
    /// deduction rules are sound but not guaranteed complete for an
    /// arbitrary random constraint draw.
    pub fn is_fully_determined(&self) -> bool {
        Board::empty(self.size)
            .replay(&self.solution_trace)
            .is_complete()
    }
}

/// Generates a puzzle of the given size.
///
/// Drafts `5 + size/2` distinct symbols from the alphabet, fills the grid
/// from either the drafted symbols directly or a Gaussian-weighted pool of
/// them (`use_weighted_pool` — skews the distribution so some symbols
/// dominate, which makes repeats and runs more likely), derives one
/// constraint per line, and solves the constraint set.
pub fn generate_puzzle<R: Rng + ?Sized>(
    size: usize,
    use_weighted_pool: bool,
    alphabet: &[Symbol],
    rng: &mut R,
) -> Result<Puzzle> {
    if size == 0 {
        return Err(Error::invalid_configuration("grid size must be at least 1"));
    }
    let distinct = unique_symbols(alphabet);
    let draft_count = 5 + size / 2;
    if distinct.len() < draft_count {
        return Err(Error::invalid_configuration(format!(
            "alphabet provides {} distinct symbols but size {} requires {}",
            distinct.len(),
            size,
            draft_count
        )));
    }

    let drafted: Vec<Symbol> = distinct.choose_multiple(rng, draft_count).copied().collect();
    let pool = if use_weighted_pool {
        weighted_pool(&drafted, (size * size) as f64 / drafted.len() as f64, rng)
    } else {
        drafted
    };

    let grid: Vec<Vec<Symbol>> = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| *pool.choose(rng).expect("pool holds at least one symbol"))
                .collect()
        })
        .collect();

    let row_constraints: Vec<Constraint> = grid
        .iter()
        .map(|line| generate_constraint(line, rng))
        .collect();
    let column_constraints: Vec<Constraint> = transpose(&grid)
        .iter()
        .map(|line| generate_constraint(line, rng))
        .collect();

    let solution_trace = solver::solve(&row_constraints, &column_constraints, size);
    let flat: Vec<Symbol> = grid.iter().flatten().copied().collect();
    let puzzle = Puzzle {
        grid,
        row_constraints,
        column_constraints,
        size,
        solution_trace,
        entropy: shannon_entropy(&flat),
    };
    debug!(
        size,
        entropy = puzzle.entropy,
        trace_len = puzzle.solution_trace.len(),
        fully_determined = puzzle.is_fully_determined(),
        "generated puzzle"
    );
    Ok(puzzle)
}

/// A symbol pool with normally-distributed repetition: each drafted symbol
/// appears `max(1, round(N(mean, stdev)))` times, so a few symbols dominate
/// the draw while every symbol stays available.
fn weighted_pool<R: Rng + ?Sized>(symbols: &[Symbol], mean: f64, rng: &mut R) -> Vec<Symbol> {
    symbols
        .iter()
        .flat_map(|&s| {
            let weight = sample_gaussian(rng, mean, POOL_STDEV).round();
            let copies = if weight < 1.0 { 1 } else { weight as usize };
            std::iter::repeat(s).take(copies)
        })
        .collect()
}

/// One draw from N(mean, stdev) via the Box–Muller transform.
fn sample_gaussian<R: Rng + ?Sized>(rng: &mut R, mean: f64, stdev: f64) -> f64 {
    // Map [0,1) to (0,1) so the log is finite.
    let mut u1: f64 = 0.0;
    while u1 == 0.0 {
        u1 = rng.gen();
    }
    let u2: f64 = rng.gen();
    let radius = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * std::f64::consts::PI * u2;
    mean + stdev * radius * theta.cos()
}

fn transpose(grid: &[Vec<Symbol>]) -> Vec<Vec<Symbol>> {
    (0..grid.len())
        .map(|col| grid.iter().map(|row| row[col]).collect())
        .collect()
}
