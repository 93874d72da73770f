#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Planet Rover adapters.
//!
//! The types here describe a scene in backend-neutral world units. Adapters
//! build a [`Scene`] from the authoritative rover state and hand it to a
//! [`RenderingBackend`], which owns the actual drawing surface.

use anyhow::Result as AnyResult;
use glam::Vec2;
use planet_rover_core::{Grid, Heading, Position};
use planet_rover_world::Rover;
use std::{error::Error, fmt};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Fill color used for obstacle squares.
pub const OBSTACLE_COLOR: Color = Color::from_rgb_u8(60, 60, 60);

/// Stroke color used for the rover arrow.
pub const ROVER_COLOR: Color = Color::from_rgb_u8(200, 40, 40);

/// Line color used for the cell lattice.
pub const GRID_LINE_COLOR: Color = Color::from_rgb_u8(160, 160, 160);

/// Fraction of the cell length used for each arrow barb.
const ARROW_BARB_FRACTION: f32 = 0.1;

/// Unit vector pointing along a heading in world space.
///
/// World space follows screen orientation, so north points toward negative
/// `y` and south toward positive `y`.
#[must_use]
pub const fn heading_vector(heading: Heading) -> Vec2 {
    match heading {
        Heading::North => Vec2::new(0.0, -1.0),
        Heading::East => Vec2::new(1.0, 0.0),
        Heading::South => Vec2::new(0.0, 1.0),
        Heading::West => Vec2::new(-1.0, 0.0),
    }
}

/// Describes the square cell lattice that frames the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPresentation {
    /// Number of columns contained in the grid.
    pub columns: u32,
    /// Number of rows contained in the grid.
    pub rows: u32,
    /// Side length of a single cell expressed in world units.
    pub cell_length: f32,
    /// Color used when drawing grid lines.
    pub line_color: Color,
}

impl GridPresentation {
    /// Creates a new grid descriptor.
    ///
    /// Returns an error when `cell_length` is not strictly positive.
    pub fn new(
        columns: u32,
        rows: u32,
        cell_length: f32,
        line_color: Color,
    ) -> Result<Self, RenderingError> {
        if cell_length <= 0.0 {
            return Err(RenderingError::InvalidCellLength { cell_length });
        }

        Ok(Self {
            columns,
            rows,
            cell_length,
            line_color,
        })
    }

    /// Total width of the grid measured in world units.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.columns as f32 * self.cell_length
    }

    /// Total height of the grid measured in world units.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.rows as f32 * self.cell_length
    }

    /// World-space coordinate of a cell's top-left corner.
    #[must_use]
    pub const fn cell_origin(&self, position: Position) -> Vec2 {
        Vec2::new(
            position.x() as f32 * self.cell_length,
            position.y() as f32 * self.cell_length,
        )
    }

    /// World-space coordinate of a cell's center.
    #[must_use]
    pub fn cell_center(&self, position: Position) -> Vec2 {
        self.cell_origin(position) + Vec2::splat(self.cell_length * 0.5)
    }
}

/// Filled square marking an obstacle cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObstaclePresentation {
    /// Cell the obstacle occupies.
    pub cell: Position,
    /// Fill color of the square.
    pub color: Color,
}

impl ObstaclePresentation {
    /// Creates a new obstacle descriptor.
    #[must_use]
    pub const fn new(cell: Position, color: Color) -> Self {
        Self { cell, color }
    }
}

/// Arrow polyline drawn inside the rover's cell to show its heading.
///
/// The shaft runs from the cell center to the midpoint of the facing edge;
/// two barbs angle back from the tip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowPresentation {
    /// Cell-center end of the shaft.
    pub tail: Vec2,
    /// Facing-edge end of the shaft.
    pub tip: Vec2,
    /// End point of the barb on the tip's left side.
    pub left_barb: Vec2,
    /// End point of the barb on the tip's right side.
    pub right_barb: Vec2,
}

/// Rover drawn as a heading arrow inside its cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoverPresentation {
    /// Cell the rover occupies.
    pub cell: Position,
    /// Heading the rover faces.
    pub heading: Heading,
    /// Stroke color of the arrow.
    pub color: Color,
}

impl RoverPresentation {
    /// Creates a new rover descriptor.
    #[must_use]
    pub const fn new(cell: Position, heading: Heading, color: Color) -> Self {
        Self {
            cell,
            heading,
            color,
        }
    }

    /// Computes the arrow polyline for this rover within `grid`.
    #[must_use]
    pub fn arrow(&self, grid: &GridPresentation) -> ArrowPresentation {
        let tail = grid.cell_center(self.cell);
        let direction = heading_vector(self.heading);
        let tip = tail + direction * (grid.cell_length * 0.5);
        let barb = grid.cell_length * ARROW_BARB_FRACTION;
        let perpendicular = Vec2::new(-direction.y, direction.x);
        let left_barb = tip - direction * barb - perpendicular * barb;
        let right_barb = tip - direction * barb + perpendicular * barb;

        ArrowPresentation {
            tail,
            tip,
            left_barb,
            right_barb,
        }
    }
}

/// Scene description combining the grid, obstacles and the rover.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Cell lattice framing the scene.
    pub grid: GridPresentation,
    /// Obstacle squares drawn inside the lattice.
    pub obstacles: Vec<ObstaclePresentation>,
    /// Rover arrow drawn inside the lattice.
    pub rover: RoverPresentation,
}

impl Scene {
    /// Creates a new scene descriptor.
    #[must_use]
    pub fn new(
        grid: GridPresentation,
        obstacles: Vec<ObstaclePresentation>,
        rover: RoverPresentation,
    ) -> Self {
        Self {
            grid,
            obstacles,
            rover,
        }
    }

    /// Projects the authoritative rover state into a scene.
    ///
    /// Uses the default palette and the provided cell length.
    pub fn from_world(rover: &Rover<'_>, cell_length: f32) -> Result<Self, RenderingError> {
        let grid: &Grid = rover.grid();
        let presentation = GridPresentation::new(
            grid.width(),
            grid.height(),
            cell_length,
            GRID_LINE_COLOR,
        )?;
        let obstacles = grid
            .obstacles()
            .iter()
            .map(|cell| ObstaclePresentation::new(*cell, OBSTACLE_COLOR))
            .collect();
        let rover = RoverPresentation::new(rover.position(), rover.heading(), ROVER_COLOR);

        Ok(Self::new(presentation, obstacles, rover))
    }
}

/// Rendering backend capable of presenting Planet Rover scenes.
pub trait RenderingBackend {
    /// Presents a single scene frame.
    fn present(&mut self, scene: &Scene) -> AnyResult<()>;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq)]
pub enum RenderingError {
    /// Cell length must be positive to avoid a zero-sized lattice.
    InvalidCellLength {
        /// Provided length that failed validation.
        cell_length: f32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellLength { cell_length } => {
                write!(f, "cell_length must be positive (received {cell_length})")
            }
        }
    }
}

impl Error for RenderingError {}

#[cfg(test)]
mod tests {
    use super::*;

    use planet_rover_core::Grid;

    #[test]
    fn grid_creation_rejects_non_positive_cell_lengths() {
        let zero = GridPresentation::new(6, 6, 0.0, GRID_LINE_COLOR)
            .expect_err("zero cell_length must be rejected");
        assert!(matches!(
            zero,
            RenderingError::InvalidCellLength { cell_length } if cell_length == 0.0
        ));

        let negative = GridPresentation::new(6, 6, -4.0, GRID_LINE_COLOR)
            .expect_err("negative cell_length must be rejected");
        assert!(matches!(
            negative,
            RenderingError::InvalidCellLength { cell_length } if cell_length == -4.0
        ));
    }

    #[test]
    fn cell_projection_scales_by_cell_length() {
        let grid = GridPresentation::new(6, 6, 100.0, GRID_LINE_COLOR).expect("grid");

        assert_eq!(grid.cell_origin(Position::new(2, 3)), Vec2::new(200.0, 300.0));
        assert_eq!(grid.cell_center(Position::new(2, 3)), Vec2::new(250.0, 350.0));
        assert_eq!(grid.width(), 600.0);
        assert_eq!(grid.height(), 600.0);
    }

    #[test]
    fn north_arrow_points_toward_the_top_edge() {
        let grid = GridPresentation::new(6, 6, 100.0, GRID_LINE_COLOR).expect("grid");
        let rover = RoverPresentation::new(Position::new(1, 1), Heading::North, ROVER_COLOR);

        let arrow = rover.arrow(&grid);

        assert_eq!(arrow.tail, Vec2::new(150.0, 150.0));
        assert_eq!(arrow.tip, Vec2::new(150.0, 100.0));
        assert_eq!(arrow.left_barb, Vec2::new(140.0, 110.0));
        assert_eq!(arrow.right_barb, Vec2::new(160.0, 110.0));
    }

    #[test]
    fn east_arrow_points_toward_the_right_edge() {
        let grid = GridPresentation::new(6, 6, 100.0, GRID_LINE_COLOR).expect("grid");
        let rover = RoverPresentation::new(Position::new(0, 0), Heading::East, ROVER_COLOR);

        let arrow = rover.arrow(&grid);

        assert_eq!(arrow.tail, Vec2::new(50.0, 50.0));
        assert_eq!(arrow.tip, Vec2::new(100.0, 50.0));
        assert_eq!(arrow.left_barb, Vec2::new(90.0, 40.0));
        assert_eq!(arrow.right_barb, Vec2::new(90.0, 60.0));
    }

    #[test]
    fn arrow_barbs_sit_symmetrically_around_the_shaft() {
        let grid = GridPresentation::new(4, 4, 80.0, GRID_LINE_COLOR).expect("grid");

        for heading in [Heading::North, Heading::East, Heading::South, Heading::West] {
            let rover = RoverPresentation::new(Position::new(2, 2), heading, ROVER_COLOR);
            let arrow = rover.arrow(&grid);
            let left = (arrow.left_barb - arrow.tip).length();
            let right = (arrow.right_barb - arrow.tip).length();
            assert!((left - right).abs() < 1e-5);
        }
    }

    #[test]
    fn scenes_project_the_full_world_state() {
        let grid = Grid::new(6, 6, vec![Position::new(2, 1), Position::new(4, 4)])
            .expect("grid");
        let rover = Rover::new(Position::new(0, 0), Heading::North, &grid).expect("rover");

        let scene = Scene::from_world(&rover, 100.0).expect("scene");

        assert_eq!(scene.grid.columns, 6);
        assert_eq!(scene.grid.rows, 6);
        assert_eq!(scene.obstacles.len(), 2);
        assert_eq!(scene.obstacles[0].cell, Position::new(2, 1));
        assert_eq!(scene.rover.cell, Position::new(0, 0));
        assert_eq!(scene.rover.heading, Heading::North);
    }
}
