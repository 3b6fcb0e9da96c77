//! Cells, moves and shortest paths.
use crate::GridworldError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// A cell of the grid, which is also the state of the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridState {
    /// Row, `0` at the top.
    pub row: usize,

    /// Column, `0` on the left.
    pub col: usize,
}

impl GridState {
    /// Constructs a state.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A primitive action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Up.
    N,
    /// Down.
    S,
    /// Left.
    W,
    /// Right.
    E,
}

impl Move {
    /// All moves.
    pub const ALL: [Move; 4] = [Move::N, Move::S, Move::W, Move::E];

    /// The move undoing `self`.
    pub fn opposite(&self) -> Self {
        match self {
            Move::N => Move::S,
            Move::S => Move::N,
            Move::W => Move::E,
            Move::E => Move::W,
        }
    }
}

/// Floor and wall cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    floor: Vec<Vec<bool>>,
    n_cols: usize,
}

impl Grid {
    /// Parses rows of `.` (floor) and `#` (wall).
    pub fn parse<T: AsRef<str>>(rows: &[T]) -> Result<Self, GridworldError> {
        let n_cols = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if n_cols == 0 {
            return Err(GridworldError::EmptyLayout);
        }

        let floor = rows
            .iter()
            .enumerate()
            .map(|(row, line)| {
                let cells = line
                    .as_ref()
                    .chars()
                    .enumerate()
                    .map(|(col, cell)| match cell {
                        '.' => Ok(true),
                        '#' => Ok(false),
                        _ => Err(GridworldError::UnknownCell { cell, row, col }),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                if cells.len() != n_cols {
                    return Err(GridworldError::RaggedRow {
                        row,
                        len: cells.len(),
                        expected: n_cols,
                    });
                }
                Ok(cells)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { floor, n_cols })
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.floor.len()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns `true` if `state` is inside the grid and on the floor.
    pub fn is_floor(&self, state: &GridState) -> bool {
        self.floor
            .get(state.row)
            .and_then(|r| r.get(state.col))
            .copied()
            .unwrap_or(false)
    }

    /// The cell reached by `mv` from `state`, if the move is legal.
    pub fn neighbor(&self, state: &GridState, mv: Move) -> Option<GridState> {
        let next = match mv {
            Move::N => GridState::new(state.row.checked_sub(1)?, state.col),
            Move::S => GridState::new(state.row + 1, state.col),
            Move::W => GridState::new(state.row, state.col.checked_sub(1)?),
            Move::E => GridState::new(state.row, state.col + 1),
        };
        if self.is_floor(&next) {
            Some(next)
        } else {
            None
        }
    }

    /// Returns `true` if `mv` from `state` lands on the floor.
    pub fn is_legal(&self, state: &GridState, mv: Move) -> bool {
        self.neighbor(state, mv).is_some()
    }

    /// Iterates over the floor cells.
    pub fn floor_cells(&self) -> impl Iterator<Item = GridState> + '_ {
        self.floor.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, is_floor)| **is_floor)
                .map(move |(col, _)| GridState::new(row, col))
        })
    }

    /// First move of a shortest path to `target` from every cell it can be
    /// reached from, excluding `target` itself.
    ///
    /// Ties between shortest paths follow the order of [`Move::ALL`].
    pub fn shortest_path_moves(&self, target: &GridState) -> HashMap<GridState, Move> {
        let mut moves = HashMap::new();
        if !self.is_floor(target) {
            return moves;
        }

        // Moves are reversible, so a search from the target finds the
        // predecessors on shortest paths.
        let mut queue = VecDeque::from(vec![*target]);
        while let Some(cell) = queue.pop_front() {
            for mv in Move::ALL.iter() {
                if let Some(prev) = self.neighbor(&cell, *mv) {
                    if prev != *target && !moves.contains_key(&prev) {
                        moves.insert(prev, mv.opposite());
                        queue.push_back(prev);
                    }
                }
            }
        }
        moves
    }
}
