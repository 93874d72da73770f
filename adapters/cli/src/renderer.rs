use std::io::Write;

use anyhow::Result as AnyResult;
use planet_rover_core::{Heading, Position};
use planet_rover_rendering::{RenderingBackend, Scene};

/// Text rendering backend drawing scenes onto a writer one frame at a time.
///
/// Obstacles render as `#`, empty cells as `.`, and the rover as a glyph
/// pointing along its heading.
pub(crate) struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer that writes frames to `out`.
    pub(crate) const fn new(out: W) -> Self {
        Self { out }
    }
}

const fn heading_glyph(heading: Heading) -> char {
    match heading {
        Heading::North => '^',
        Heading::East => '>',
        Heading::South => 'v',
        Heading::West => '<',
    }
}

impl<W: Write> RenderingBackend for TextRenderer<W> {
    fn present(&mut self, scene: &Scene) -> AnyResult<()> {
        for y in 0..scene.grid.rows {
            for x in 0..scene.grid.columns {
                let cell = Position::new(x, y);
                let glyph = if scene.rover.cell == cell {
                    heading_glyph(scene.rover.heading)
                } else if scene.obstacles.iter().any(|obstacle| obstacle.cell == cell) {
                    '#'
                } else {
                    '.'
                };
                if x > 0 {
                    write!(self.out, " ")?;
                }
                write!(self.out, "{glyph}")?;
            }
            writeln!(self.out)?;
        }
        writeln!(
            self.out,
            "rover at {} facing {}",
            scene.rover.cell, scene.rover.heading
        )?;
        self.out.flush()?;
        Ok(())
    }
}
