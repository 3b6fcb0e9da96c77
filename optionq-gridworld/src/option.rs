//! Options of the gridworld.
use crate::{Grid, GridState, Move};
use optionq_core::{Decision, Opt};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, rc::Rc};

/// Identity of a [`GridOption`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridOptionId {
    /// A primitive move.
    Primitive(Move),

    /// A sub-goal option by name.
    Subgoal(String),
}

impl fmt::Display for GridOptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(mv) => write!(f, "{:?}", mv),
            Self::Subgoal(name) => write!(f, "{}", name),
        }
    }
}

/// An option of the gridworld.
#[derive(Clone)]
pub enum GridOption {
    /// A single move, available where it is legal.
    Primitive {
        /// The move.
        mv: Move,
        /// The grid the move is checked against.
        grid: Rc<Grid>,
    },

    /// Walks a shortest path to `target`.
    ///
    /// Available where `target` is reachable, except on `target` itself.
    /// Terminates on `target`, or wherever `target` cannot be reached.
    Subgoal {
        /// Name of the option.
        name: String,
        /// The cell to reach.
        target: GridState,
        /// First move of a shortest path to `target`.
        moves: Rc<HashMap<GridState, Move>>,
    },
}

impl GridOption {
    /// A primitive option.
    pub fn primitive(mv: Move, grid: Rc<Grid>) -> Self {
        Self::Primitive { mv, grid }
    }

    /// A sub-goal option with shortest paths computed on `grid`.
    pub fn subgoal(name: impl Into<String>, target: GridState, grid: &Grid) -> Self {
        Self::Subgoal {
            name: name.into(),
            target,
            moves: Rc::new(grid.shortest_path_moves(&target)),
        }
    }
}

impl fmt::Debug for GridOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive { mv, .. } => f.debug_tuple("Primitive").field(mv).finish(),
            Self::Subgoal { name, target, .. } => f
                .debug_struct("Subgoal")
                .field("name", name)
                .field("target", target)
                .finish(),
        }
    }
}

impl Opt<GridState, Move> for GridOption {
    type Id = GridOptionId;

    fn id(&self) -> GridOptionId {
        match self {
            Self::Primitive { mv, .. } => GridOptionId::Primitive(*mv),
            Self::Subgoal { name, .. } => GridOptionId::Subgoal(name.clone()),
        }
    }

    fn initiation(&self, state: &GridState) -> bool {
        match self {
            Self::Primitive { mv, grid } => grid.is_legal(state, *mv),
            Self::Subgoal { moves, .. } => moves.contains_key(state),
        }
    }

    fn policy(&self, state: &GridState) -> Decision<Move, Self> {
        match self {
            Self::Primitive { mv, .. } => Decision::Primitive(*mv),
            // Off the path the option has already terminated.
            Self::Subgoal { moves, .. } => {
                Decision::Primitive(moves.get(state).copied().unwrap_or(Move::N))
            }
        }
    }

    fn termination(&self, state: &GridState) -> f64 {
        match self {
            Self::Primitive { .. } => 1.0,
            Self::Subgoal { target, moves, .. } => {
                if state == target || !moves.contains_key(state) {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::parse(&["...#...", ".......", "...#..."]).unwrap()
    }

    #[test]
    fn test_primitive() {
        let grid = Rc::new(grid());
        let east = GridOption::primitive(Move::E, grid);
        let s = GridState::new(0, 0);

        assert_eq!(east.id(), GridOptionId::Primitive(Move::E));
        assert!(east.initiation(&s));
        assert!(!east.initiation(&GridState::new(0, 2)));
        assert!(matches!(east.policy(&s), Decision::Primitive(Move::E)));
        assert_eq!(east.termination(&s), 1.0);
    }

    #[test]
    fn test_subgoal() {
        let doorway = GridState::new(1, 3);
        let option = GridOption::subgoal("doorway", doorway, &grid());

        assert_eq!(option.id(), GridOptionId::Subgoal("doorway".to_string()));
        assert_eq!(option.id().to_string(), "doorway");
        assert!(option.initiation(&GridState::new(0, 0)));
        assert!(!option.initiation(&doorway));
        assert!(matches!(
            option.policy(&GridState::new(1, 2)),
            Decision::Primitive(Move::E)
        ));
        assert_eq!(option.termination(&GridState::new(0, 0)), 0.0);
        assert_eq!(option.termination(&doorway), 1.0);
    }

    #[test]
    fn test_unreachable_subgoal() {
        let grid = Grid::parse(&["..#."]).unwrap();
        let option = GridOption::subgoal("island", GridState::new(0, 3), &grid);
        let s = GridState::new(0, 0);

        assert!(!option.initiation(&s));
        assert_eq!(option.termination(&s), 1.0);
    }
}
