use im::Vector;
use serde::{Deserialize, Serialize};

/// A single grid symbol, one member of the puzzle's alphabet.
pub type Symbol = char;

/// A grid cell: a known [`Symbol`] or unknown.
pub type Cell = Option<Symbol>;

/// The axis a line lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dim {
    Row,
    Col,
}

/// One deduced cell fact: `value` belongs at `(row, col)`.
///
/// The order of an assignment sequence is significant — it is the trace in
/// which a solver discovered facts, and replaying must apply them in that
/// order (a later assignment for the same cell overwrites an earlier one).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub row: usize,
    pub col: usize,
    pub value: Symbol,
}

impl Assignment {
    pub fn new(row: usize, col: usize, value: Symbol) -> Self {
        Self { row, col, value }
    }

    /// Places a deduced line position onto grid coordinates: for a row line
    /// the position is the column, for a column line it is the row.
    pub fn on_line(dim: Dim, index: usize, position: usize, value: Symbol) -> Self {
        match dim {
            Dim::Row => Self::new(index, position, value),
            Dim::Col => Self::new(position, index, value),
        }
    }
}

/// A square grid of cells, the working-grid abstraction shared by the
/// assembler and the solver.
///
/// Backed by persistent vectors so that [`Board::replay`] can hand out a new
/// board without touching the one it was called on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vector<Vector<Cell>>,
}

impl Board {
    /// A size×size board with every cell unknown.
    pub fn empty(size: usize) -> Self {
        let row: Vector<Cell> = std::iter::repeat(None).take(size).collect();
        let cells = std::iter::repeat(row).take(size).collect();
        Self { size, cells }
    }

    /// A fully-known board from row-major symbol data.
    pub fn from_rows(rows: &[Vec<Symbol>]) -> Self {
        let cells = rows
            .iter()
            .map(|row| row.iter().map(|&s| Some(s)).collect())
            .collect();
        Self {
            size: rows.len(),
            cells,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells.get(row).and_then(|r| r.get(col).copied()).flatten()
    }

    /// Folds an assignment sequence onto a copy of this board. Later
    /// assignments overwrite earlier ones at the same coordinate;
    /// out-of-bounds assignments are ignored.
    pub fn replay(&self, assignments: &[Assignment]) -> Board {
        let mut cells = self.cells.clone();
        for a in assignments {
            if a.row < self.size && a.col < self.size {
                let row = cells[a.row].update(a.col, Some(a.value));
                cells.set(a.row, row);
            }
        }
        Board {
            size: self.size,
            cells,
        }
    }

    /// Extracts row or column `index` as a line of cells. Column extraction
    /// reads the transposed row.
    pub fn line(&self, dim: Dim, index: usize) -> Vec<Cell> {
        match dim {
            Dim::Row => self
                .cells
                .get(index)
                .map(|row| row.iter().copied().collect())
                .unwrap_or_default(),
            Dim::Col => (0..self.size).map(|row| self.get(row, index)).collect(),
        }
    }

    /// Whether every cell holds a symbol.
    pub fn is_complete(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }
}
