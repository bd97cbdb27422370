//! The drunken-bishop board walk
//!
//! A walker starts in the middle of a square grid and replays a
//! [`DirectionSequence`] once per iteration, bumping the visit counter of
//! every cell it lands on. Moves that would leave the grid are absorbed at
//! the edge.

use crate::direction::{Direction, DirectionSequence};
use crate::{Error, Result};

/// Transient walker position, always inside `[0, size-1]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walker {
    pub row: usize,
    pub column: usize,
    size: usize,
}

impl Walker {
    /// Place a walker at the center cell of a `size × size` board.
    pub fn centered(size: usize) -> Self {
        Self {
            row: size / 2,
            column: size / 2,
            size,
        }
    }

    /// Take one step, clamping at the board edge.
    pub fn step(&mut self, direction: Direction) {
        let last = self.size - 1;
        match direction {
            Direction::N => self.row = self.row.saturating_sub(1),
            Direction::S => self.row = (self.row + 1).min(last),
            Direction::E => self.column = self.column.saturating_sub(1),
            Direction::W => self.column = (self.column + 1).min(last),
        }
    }
}

/// Square grid of visit counters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Run `iterations` passes of `directions` over a fresh `size × size`
    /// board.
    pub fn walk(size: u32, directions: &DirectionSequence, iterations: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid_dimension("board_size", size));
        }
        let size = size as usize;
        let mut board = Self {
            size,
            cells: vec![0u32; size * size],
        };
        let mut walker = Walker::centered(size);

        // Odd passes replay the sequence backwards
        for pass in 0..iterations {
            if pass % 2 == 1 {
                board.replay(&mut walker, directions.steps().iter().rev());
            } else {
                board.replay(&mut walker, directions.steps().iter());
            }
        }

        Ok(board)
    }

    fn replay<'a>(&mut self, walker: &mut Walker, steps: impl Iterator<Item = &'a Direction>) {
        for &direction in steps {
            walker.step(direction);
            self.visit(walker.row, walker.column);
        }
    }

    /// Bump one counter; saturates at `u32::MAX` instead of overflowing.
    fn visit(&mut self, row: usize, column: usize) {
        let cell = &mut self.cells[row * self.size + column];
        *cell = cell.saturating_add(1);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Visit count at `(row, column)`, or `None` outside the board.
    pub fn get(&self, row: usize, column: usize) -> Option<u32> {
        if row >= self.size || column >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + column])
    }

    /// All counters in row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    /// Smallest and largest counter on the board.
    pub fn bounds(&self) -> (u32, u32) {
        let min = self.cells.iter().copied().min().unwrap_or(0);
        let max = self.cells.iter().copied().max().unwrap_or(0);
        (min, max)
    }

    pub fn total_visits(&self) -> u64 {
        self.cells.iter().map(|&c| u64::from(c)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn walker_is_pinned_at_every_edge() {
        let mut w = Walker::centered(5);
        assert_eq!((w.row, w.column), (2, 2));
        for _ in 0..10 {
            w.step(N);
        }
        assert_eq!(w.row, 0);
        for _ in 0..10 {
            w.step(S);
        }
        assert_eq!(w.row, 4);
        for _ in 0..10 {
            w.step(E);
        }
        assert_eq!(w.column, 0);
        for _ in 0..10 {
            w.step(W);
        }
        assert_eq!(w.column, 4);
    }

    #[test]
    fn center_uses_floor_division() {
        let w = Walker::centered(4);
        assert_eq!((w.row, w.column), (2, 2));
        let w = Walker::centered(1);
        assert_eq!((w.row, w.column), (0, 0));
    }

    #[test]
    fn walk_counts_each_step_after_moving() {
        let seq = DirectionSequence::from_steps(vec![N, N, W]);
        let board = Board::walk(3, &seq, 1).unwrap();
        // (1,1) -> (0,1) -> (0,1) -> (0,2)
        assert_eq!(board.get(0, 1), Some(2));
        assert_eq!(board.get(0, 2), Some(1));
        assert_eq!(board.get(1, 1), Some(0));
        assert_eq!(board.total_visits(), 3);
    }

    #[test]
    fn odd_iterations_walk_backwards() {
        let seq = DirectionSequence::from_steps(vec![S, E]);
        let board = Board::walk(3, &seq, 2).unwrap();
        // pass 0: S -> (2,1), E -> (2,0); pass 1: E -> (2,0), S -> (2,0)
        assert_eq!(board.get(2, 1), Some(1));
        assert_eq!(board.get(2, 0), Some(3));
    }

    #[test]
    fn reverse_pass_retraces_forward_pass() {
        let seq = DirectionSequence::from_steps(vec![N, E, E, S]);
        let board = Board::walk(5, &seq, 2).unwrap();
        // pass 0: (1,2) (1,1) (1,0) (2,0); pass 1: (3,0) (3,0) (3,0) (2,0)
        assert_eq!(board.get(1, 2), Some(1));
        assert_eq!(board.get(1, 1), Some(1));
        assert_eq!(board.get(1, 0), Some(1));
        assert_eq!(board.get(2, 0), Some(2));
        assert_eq!(board.get(3, 0), Some(3));
        assert_eq!(board.total_visits(), 8);
    }

    #[test]
    fn visit_counter_saturates() {
        let mut board = Board {
            size: 1,
            cells: vec![u32::MAX - 1],
        };
        board.visit(0, 0);
        board.visit(0, 0);
        board.visit(0, 0);
        assert_eq!(board.get(0, 0), Some(u32::MAX));
    }

    #[test]
    fn zero_iterations_leave_board_untouched() {
        let seq = DirectionSequence::from_slug("anything");
        let board = Board::walk(7, &seq, 0).unwrap();
        assert!(board.cells().iter().all(|&c| c == 0));
        assert_eq!(board.bounds(), (0, 0));
    }

    #[test]
    fn zero_size_board_is_rejected() {
        let seq = DirectionSequence::from_slug("x");
        assert!(matches!(
            Board::walk(0, &seq, 3),
            Err(Error::InvalidDimension { name: "board_size", value: 0 })
        ));
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let board = Board::walk(2, &DirectionSequence::from_slug("x"), 1).unwrap();
        assert_eq!(board.get(2, 0), None);
        assert_eq!(board.get(0, 2), None);
        assert_eq!(board.rows().count(), 2);
    }
}
