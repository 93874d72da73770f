#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative rover state management for Planet Rover.
//!
//! The [`Rover`] owns the only mutable state in the workspace: its current
//! cell and heading. The grid it drives on stays immutable and shared, so the
//! rover borrows it for its whole lifetime and every mutation validates the
//! candidate cell against that borrow before committing.

use planet_rover_core::{Grid, Heading, Instruction, PlacementError, Position, RoverError};

/// Rover state machine bound to the grid it drives on.
///
/// Mutation goes through `&mut self` receivers, so a single rover can never
/// interleave two validate-then-commit sequences.
#[derive(Debug)]
pub struct Rover<'grid> {
    position: Position,
    heading: Heading,
    grid: &'grid Grid,
}

impl<'grid> Rover<'grid> {
    /// Places a rover on the grid.
    ///
    /// The starting cell must lie inside the grid and must not carry an
    /// obstacle; the traversability invariant holds from construction
    /// onward.
    pub fn new(
        position: Position,
        heading: Heading,
        grid: &'grid Grid,
    ) -> Result<Self, PlacementError> {
        if !grid.contains(position) {
            return Err(PlacementError::OutOfBounds { position });
        }
        if grid.is_obstacle(position) {
            return Err(PlacementError::Obstructed { position });
        }
        Ok(Self {
            position,
            heading,
            grid,
        })
    }

    /// Cell the rover currently occupies.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Heading the rover currently faces.
    #[must_use]
    pub const fn heading(&self) -> Heading {
        self.heading
    }

    /// Grid the rover drives on.
    #[must_use]
    pub const fn grid(&self) -> &'grid Grid {
        self.grid
    }

    /// Advances one cell along the current heading, wrapping at the edges.
    ///
    /// When the destination cell carries an obstacle the move is refused and
    /// the rover stays where it is.
    pub fn move_forward(&mut self) -> Result<(), RoverError> {
        self.step(self.heading)
    }

    /// Retreats one cell opposite the current heading, wrapping at the edges.
    ///
    /// The heading never changes; a refused move leaves the rover in place.
    pub fn move_backward(&mut self) -> Result<(), RoverError> {
        self.step(self.heading.reversed())
    }

    /// Rotates 90 degrees counter-clockwise in place.
    pub fn turn_left(&mut self) {
        self.heading = self.heading.turned_left();
    }

    /// Rotates 90 degrees clockwise in place.
    pub fn turn_right(&mut self) {
        self.heading = self.heading.turned_right();
    }

    /// Executes a single instruction.
    pub fn execute(&mut self, instruction: Instruction) -> Result<(), RoverError> {
        match instruction {
            Instruction::Forward => self.move_forward(),
            Instruction::Backward => self.move_backward(),
            Instruction::TurnLeft => {
                self.turn_left();
                Ok(())
            }
            Instruction::TurnRight => {
                self.turn_right();
                Ok(())
            }
        }
    }

    /// Executes an order string one code at a time.
    ///
    /// Codes are parsed and applied strictly left to right. The first code
    /// that fails to parse or execute aborts the run; instructions that
    /// already took effect are never rolled back.
    pub fn follow_orders(&mut self, orders: &str) -> Result<(), RoverError> {
        for code in orders.chars() {
            let instruction = Instruction::from_code(code)?;
            self.execute(instruction)?;
        }
        Ok(())
    }

    fn step(&mut self, toward: Heading) -> Result<(), RoverError> {
        let candidate = self.grid.wrapped_neighbor(self.position, toward);
        if !self.grid.is_traversable(candidate) {
            return Err(RoverError::ObstacleBlocked { cell: candidate });
        }
        self.position = candidate;
        Ok(())
    }
}
