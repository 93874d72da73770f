#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Planet Rover workspace.
//!
//! This crate defines the vocabulary every other crate speaks: grid cell
//! coordinates, the four compass headings and their fixed turn cycles, the
//! order codes a rover understands, the immutable [`Grid`] the rover drives
//! on, and the error surface raised when a grid, a placement, or an order is
//! rejected. The authoritative rover state machine lives in the world crate;
//! adapters and systems depend only on the types declared here.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Integer coordinate addressing a single grid cell.
///
/// `x` grows toward the east edge and `y` grows toward the south edge, so the
/// origin `(0, 0)` names the north-west corner cell.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    x: u32,
    y: u32,
}

impl Position {
    /// Creates a position from column and row indices.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Column index of the cell.
    #[must_use]
    pub const fn x(self) -> u32 {
        self.x
    }

    /// Row index of the cell.
    #[must_use]
    pub const fn y(self) -> u32 {
        self.y
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass heading a rover can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// Facing toward decreasing `y` coordinates.
    North,
    /// Facing toward increasing `x` coordinates.
    East,
    /// Facing toward increasing `y` coordinates.
    South,
    /// Facing toward decreasing `x` coordinates.
    West,
}

/// Ordered cycle visited by successive left turns.
const LEFT_TURN_CYCLE: [Heading; 4] = [
    Heading::North,
    Heading::West,
    Heading::South,
    Heading::East,
];

/// Ordered cycle visited by successive right turns.
const RIGHT_TURN_CYCLE: [Heading; 4] = [
    Heading::North,
    Heading::East,
    Heading::South,
    Heading::West,
];

/// Returns the element following `current` in `cycle`, wrapping at the end.
fn cycle_successor(cycle: [Heading; 4], current: Heading) -> Heading {
    let index = cycle
        .iter()
        .position(|heading| *heading == current)
        .unwrap_or(0);
    cycle[(index + 1) % cycle.len()]
}

impl Heading {
    /// Heading after a single 90 degree counter-clockwise turn.
    #[must_use]
    pub fn turned_left(self) -> Self {
        cycle_successor(LEFT_TURN_CYCLE, self)
    }

    /// Heading after a single 90 degree clockwise turn.
    #[must_use]
    pub fn turned_right(self) -> Self {
        cycle_successor(RIGHT_TURN_CYCLE, self)
    }

    /// Geometric opposite of this heading.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(label)
    }
}

/// Single order a rover can execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Advance one cell along the current heading.
    Forward,
    /// Retreat one cell opposite the current heading.
    Backward,
    /// Rotate 90 degrees counter-clockwise in place.
    TurnLeft,
    /// Rotate 90 degrees clockwise in place.
    TurnRight,
}

impl Instruction {
    /// Parses a single-letter order code.
    ///
    /// Recognised codes are `M` (forward), `B` (backward), `L` (turn left),
    /// and `R` (turn right). Any other character is rejected without side
    /// effects.
    pub const fn from_code(code: char) -> Result<Self, RoverError> {
        match code {
            'M' => Ok(Self::Forward),
            'B' => Ok(Self::Backward),
            'L' => Ok(Self::TurnLeft),
            'R' => Ok(Self::TurnRight),
            other => Err(RoverError::InvalidInstruction { code: other }),
        }
    }

    /// Canonical single-letter code for this order.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Forward => 'M',
            Self::Backward => 'B',
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
        }
    }
}

/// Immutable rectangular grid the rover drives on.
///
/// Construction validates dimensions and obstacle coordinates; afterwards the
/// grid only answers queries. Opposite edges are glued together, so every
/// cell has a neighbor along every heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    obstacles: Vec<Position>,
}

impl Grid {
    /// Creates a grid with the given dimensions and obstacle cells.
    ///
    /// Rejects zero-sized dimensions and obstacles listed outside the grid.
    pub fn new(
        width: u32,
        height: u32,
        obstacles: Vec<Position>,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        if let Some(outside) = obstacles
            .iter()
            .find(|obstacle| obstacle.x() >= width || obstacle.y() >= height)
        {
            return Err(GridError::ObstacleOutOfBounds {
                obstacle: *outside,
            });
        }
        Ok(Self {
            width,
            height,
            obstacles,
        })
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Obstacle cells in declaration order.
    #[must_use]
    pub fn obstacles(&self) -> &[Position] {
        &self.obstacles
    }

    /// Reports whether the position lies inside the grid bounds.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x() < self.width && position.y() < self.height
    }

    /// Reports whether the position is occupied by an obstacle.
    #[must_use]
    pub fn is_obstacle(&self, position: Position) -> bool {
        self.obstacles.iter().any(|obstacle| *obstacle == position)
    }

    /// Reports whether a rover may occupy the position.
    #[must_use]
    pub fn is_traversable(&self, position: Position) -> bool {
        self.contains(position) && !self.is_obstacle(position)
    }

    /// Neighboring cell one step along `heading`, wrapping at the edges.
    ///
    /// Stepping north from row zero lands on the bottom row, stepping east
    /// from the last column lands on column zero, and so on for the other
    /// two headings.
    #[must_use]
    pub const fn wrapped_neighbor(&self, position: Position, heading: Heading) -> Position {
        let x = position.x();
        let y = position.y();
        match heading {
            Heading::North => {
                let wrapped = if y == 0 { self.height - 1 } else { y - 1 };
                Position::new(x, wrapped)
            }
            Heading::South => {
                let wrapped = if y + 1 >= self.height { 0 } else { y + 1 };
                Position::new(x, wrapped)
            }
            Heading::East => {
                let wrapped = if x + 1 >= self.width { 0 } else { x + 1 };
                Position::new(wrapped, y)
            }
            Heading::West => {
                let wrapped = if x == 0 { self.width - 1 } else { x - 1 };
                Position::new(wrapped, y)
            }
        }
    }
}

/// Errors raised while executing rover orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum RoverError {
    /// The move destination is blocked or unusable.
    #[error("obstacle blocks the destination cell {cell}")]
    ObstacleBlocked {
        /// Cell the rover attempted to enter.
        cell: Position,
    },
    /// The order code is not part of the rover vocabulary.
    #[error("invalid order code '{code}'")]
    InvalidInstruction {
        /// Character that failed to parse.
        code: char,
    },
}

/// Errors raised while constructing a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum GridError {
    /// Width or height was zero.
    #[error("grid dimensions {width}x{height} must both be positive")]
    InvalidDimensions {
        /// Requested column count.
        width: u32,
        /// Requested row count.
        height: u32,
    },
    /// An obstacle was declared outside the grid bounds.
    #[error("obstacle {obstacle} lies outside the grid")]
    ObstacleOutOfBounds {
        /// Offending obstacle coordinate.
        obstacle: Position,
    },
}

/// Errors raised while placing a rover on a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum PlacementError {
    /// The requested cell lies outside the grid bounds.
    #[error("starting cell {position} lies outside the grid")]
    OutOfBounds {
        /// Cell requested for the rover.
        position: Position,
    },
    /// The requested cell is occupied by an obstacle.
    #[error("starting cell {position} is occupied by an obstacle")]
    Obstructed {
        /// Cell requested for the rover.
        position: Position,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde::de::DeserializeOwned;

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let decoded: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&decoded, value);
    }

    #[test]
    fn left_turns_follow_the_counter_clockwise_cycle() {
        assert_eq!(Heading::North.turned_left(), Heading::West);
        assert_eq!(Heading::West.turned_left(), Heading::South);
        assert_eq!(Heading::South.turned_left(), Heading::East);
        assert_eq!(Heading::East.turned_left(), Heading::North);
    }

    #[test]
    fn right_turns_follow_the_clockwise_cycle() {
        assert_eq!(Heading::North.turned_right(), Heading::East);
        assert_eq!(Heading::East.turned_right(), Heading::South);
        assert_eq!(Heading::South.turned_right(), Heading::West);
        assert_eq!(Heading::West.turned_right(), Heading::North);
    }

    #[test]
    fn four_turns_restore_the_heading() {
        for heading in [Heading::North, Heading::East, Heading::South, Heading::West] {
            let after_lefts = heading
                .turned_left()
                .turned_left()
                .turned_left()
                .turned_left();
            let after_rights = heading
                .turned_right()
                .turned_right()
                .turned_right()
                .turned_right();
            assert_eq!(after_lefts, heading);
            assert_eq!(after_rights, heading);
        }
    }

    #[test]
    fn opposite_turns_cancel() {
        for heading in [Heading::North, Heading::East, Heading::South, Heading::West] {
            assert_eq!(heading.turned_left().turned_right(), heading);
            assert_eq!(heading.turned_right().turned_left(), heading);
        }
    }

    #[test]
    fn reversing_twice_restores_the_heading() {
        for heading in [Heading::North, Heading::East, Heading::South, Heading::West] {
            assert_eq!(heading.reversed().reversed(), heading);
        }
    }

    #[test]
    fn order_codes_parse_to_their_instructions() {
        assert_eq!(Instruction::from_code('M'), Ok(Instruction::Forward));
        assert_eq!(Instruction::from_code('B'), Ok(Instruction::Backward));
        assert_eq!(Instruction::from_code('L'), Ok(Instruction::TurnLeft));
        assert_eq!(Instruction::from_code('R'), Ok(Instruction::TurnRight));
    }

    #[test]
    fn unknown_order_codes_are_rejected() {
        assert_eq!(
            Instruction::from_code('X'),
            Err(RoverError::InvalidInstruction { code: 'X' })
        );
        assert_eq!(
            Instruction::from_code('m'),
            Err(RoverError::InvalidInstruction { code: 'm' })
        );
    }

    #[test]
    fn instruction_codes_round_trip() {
        for instruction in [
            Instruction::Forward,
            Instruction::Backward,
            Instruction::TurnLeft,
            Instruction::TurnRight,
        ] {
            assert_eq!(Instruction::from_code(instruction.code()), Ok(instruction));
        }
    }

    #[test]
    fn grid_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 6, Vec::new()),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 6
            })
        );
        assert_eq!(
            Grid::new(6, 0, Vec::new()),
            Err(GridError::InvalidDimensions {
                width: 6,
                height: 0
            })
        );
    }

    #[test]
    fn grid_rejects_out_of_bounds_obstacles() {
        let result = Grid::new(4, 4, vec![Position::new(1, 1), Position::new(4, 2)]);
        assert_eq!(
            result,
            Err(GridError::ObstacleOutOfBounds {
                obstacle: Position::new(4, 2)
            })
        );
    }

    #[test]
    fn traversability_excludes_obstacles_and_outside_cells() {
        let grid = Grid::new(3, 3, vec![Position::new(1, 1)]).expect("grid");
        assert!(grid.is_traversable(Position::new(0, 0)));
        assert!(!grid.is_traversable(Position::new(1, 1)));
        assert!(!grid.is_traversable(Position::new(3, 0)));
        assert!(grid.is_obstacle(Position::new(1, 1)));
        assert!(!grid.is_obstacle(Position::new(2, 2)));
    }

    #[test]
    fn interior_neighbors_step_one_cell() {
        let grid = Grid::new(5, 5, Vec::new()).expect("grid");
        let center = Position::new(2, 2);
        assert_eq!(
            grid.wrapped_neighbor(center, Heading::North),
            Position::new(2, 1)
        );
        assert_eq!(
            grid.wrapped_neighbor(center, Heading::South),
            Position::new(2, 3)
        );
        assert_eq!(
            grid.wrapped_neighbor(center, Heading::East),
            Position::new(3, 2)
        );
        assert_eq!(
            grid.wrapped_neighbor(center, Heading::West),
            Position::new(1, 2)
        );
    }

    #[test]
    fn edge_neighbors_wrap_to_the_opposite_edge() {
        let grid = Grid::new(4, 3, Vec::new()).expect("grid");
        assert_eq!(
            grid.wrapped_neighbor(Position::new(2, 0), Heading::North),
            Position::new(2, 2)
        );
        assert_eq!(
            grid.wrapped_neighbor(Position::new(2, 2), Heading::South),
            Position::new(2, 0)
        );
        assert_eq!(
            grid.wrapped_neighbor(Position::new(3, 1), Heading::East),
            Position::new(0, 1)
        );
        assert_eq!(
            grid.wrapped_neighbor(Position::new(0, 1), Heading::West),
            Position::new(3, 1)
        );
    }

    #[test]
    fn contract_types_survive_serialization() {
        assert_round_trip(&Position::new(3, 4));
        assert_round_trip(&Heading::West);
        assert_round_trip(&Instruction::Backward);
        assert_round_trip(&RoverError::ObstacleBlocked {
            cell: Position::new(2, 1),
        });
        assert_round_trip(&PlacementError::Obstructed {
            position: Position::new(0, 3),
        });
        let grid = Grid::new(6, 6, vec![Position::new(2, 1), Position::new(4, 4)])
            .expect("grid");
        assert_round_trip(&grid);
    }
}
