#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Planet Rover experience.

mod layout_transfer;
mod renderer;

use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use planet_rover_core::{Grid, Heading, Instruction, Position};
use planet_rover_rendering::{RenderingBackend, Scene};
use planet_rover_system_control::Control;
use planet_rover_world::Rover;

use crate::layout_transfer::GridLayoutSnapshot;
use crate::renderer::TextRenderer;

const DEFAULT_WIDTH: u32 = 6;
const DEFAULT_HEIGHT: u32 = 6;
const CELL_LENGTH: f32 = 100.0;

/// Command-line arguments accepted by the rover binary.
#[derive(Debug, Parser)]
#[command(
    name = "planet-rover",
    about = "Drive a rover across a wrapping obstacle grid"
)]
struct Args {
    /// Number of grid columns.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,
    /// Number of grid rows.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,
    /// Obstacle cell given as X,Y; repeat the flag for more obstacles.
    #[arg(long = "obstacle", value_parser = parse_cell)]
    obstacles: Vec<Position>,
    /// Starting cell given as X,Y.
    #[arg(long, value_parser = parse_cell, default_value = "0,0")]
    start: Position,
    /// Starting heading.
    #[arg(long, value_enum, default_value_t = HeadingArg::North)]
    heading: HeadingArg,
    /// Order string to execute, e.g. MMRMM.
    #[arg(long)]
    orders: Option<String>,
    /// Encoded layout-transfer string replacing the grid flags.
    #[arg(long, conflicts_with = "layout_file")]
    layout: Option<String>,
    /// Path to a JSON layout document replacing the grid flags.
    #[arg(long)]
    layout_file: Option<PathBuf>,
    /// Print the encoded layout-transfer string for the active grid.
    #[arg(long)]
    export_layout: bool,
    /// Read commands line by line after applying the order string.
    #[arg(long)]
    interactive: bool,
}

/// Heading names accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum HeadingArg {
    /// Face toward the top edge.
    North,
    /// Face toward the right edge.
    East,
    /// Face toward the bottom edge.
    South,
    /// Face toward the left edge.
    West,
}

impl From<HeadingArg> for Heading {
    fn from(value: HeadingArg) -> Self {
        match value {
            HeadingArg::North => Self::North,
            HeadingArg::East => Self::East,
            HeadingArg::South => Self::South,
            HeadingArg::West => Self::West,
        }
    }
}

/// JSON layout document accepted by `--layout-file`.
#[derive(Debug, Serialize, Deserialize)]
struct GridDocument {
    width: u32,
    height: u32,
    obstacles: Vec<Position>,
}

fn parse_cell(value: &str) -> Result<Position, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y coordinates, received '{value}'"))?;
    let x = x
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("invalid column in '{value}': {error}"))?;
    let y = y
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("invalid row in '{value}': {error}"))?;
    Ok(Position::new(x, y))
}

fn default_obstacles() -> Vec<Position> {
    vec![
        Position::new(2, 1),
        Position::new(4, 4),
        Position::new(0, 3),
    ]
}

fn resolve_grid(args: &Args) -> Result<Grid> {
    if let Some(encoded) = &args.layout {
        let snapshot =
            GridLayoutSnapshot::decode(encoded).context("decoding the layout string")?;
        return Grid::new(snapshot.width, snapshot.height, snapshot.obstacles)
            .context("building the grid from the layout string");
    }

    if let Some(path) = &args.layout_file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading the layout document {}", path.display()))?;
        let document: GridDocument =
            serde_json::from_str(&contents).context("parsing the layout document")?;
        return Grid::new(document.width, document.height, document.obstacles)
            .context("building the grid from the layout document");
    }

    // The stock 6x6 patrol course; explicit flags always win.
    let obstacles = if args.obstacles.is_empty()
        && args.width == DEFAULT_WIDTH
        && args.height == DEFAULT_HEIGHT
    {
        default_obstacles()
    } else {
        args.obstacles.clone()
    };
    Grid::new(args.width, args.height, obstacles)
        .context("building the grid from command-line flags")
}

fn render<B: RenderingBackend>(backend: &mut B, rover: &Rover<'_>) -> Result<()> {
    let scene = Scene::from_world(rover, CELL_LENGTH).context("projecting the scene")?;
    backend.present(&scene)
}

fn run_orders<B: RenderingBackend>(
    rover: &mut Rover<'_>,
    orders: &str,
    backend: &mut B,
) -> Result<()> {
    for code in orders.chars() {
        let step = Instruction::from_code(code).and_then(|instruction| rover.execute(instruction));
        match step {
            Ok(()) => println!("{code} -> {} facing {}", rover.position(), rover.heading()),
            Err(error) => {
                eprintln!("order '{code}' failed: {error}");
                render(backend, rover)?;
                bail!("order run aborted at '{code}'");
            }
        }
    }
    render(backend, rover)
}

fn resolve_command(control: &Control, token: &str) -> Option<Instruction> {
    if let Some(instruction) = control.translate_token(token) {
        return Some(instruction);
    }
    match token {
        "w" | "W" => Some(Instruction::Forward),
        "s" | "S" => Some(Instruction::Backward),
        "a" | "A" => Some(Instruction::TurnLeft),
        "d" | "D" => Some(Instruction::TurnRight),
        _ => {
            let mut codes = token.chars();
            match (codes.next(), codes.next()) {
                (Some(code), None) => Instruction::from_code(code.to_ascii_uppercase()).ok(),
                _ => None,
            }
        }
    }
}

fn run_interactive<B: RenderingBackend>(rover: &mut Rover<'_>, backend: &mut B) -> Result<()> {
    let control = Control::new();
    println!("commands: w/s/a/d, arrow-key names, order codes M/B/L/R, q to quit");

    for line in io::stdin().lock().lines() {
        let line = line.context("reading an interactive command")?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        if token.eq_ignore_ascii_case("q") || token.eq_ignore_ascii_case("quit") {
            break;
        }

        match resolve_command(&control, token) {
            Some(instruction) => {
                if let Err(error) = rover.execute(instruction) {
                    eprintln!("{error}");
                }
            }
            None => eprintln!("unknown command '{token}'"),
        }
        render(backend, rover)?;
    }
    Ok(())
}

/// Entry point for the Planet Rover command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    let grid = resolve_grid(&args)?;

    if args.export_layout {
        let snapshot = GridLayoutSnapshot {
            width: grid.width(),
            height: grid.height(),
            obstacles: grid.obstacles().to_vec(),
        };
        println!("{}", snapshot.encode());
    }

    let mut rover =
        Rover::new(args.start, args.heading.into(), &grid).context("placing the rover")?;
    let mut backend = TextRenderer::new(io::stdout());
    render(&mut backend, &rover)?;

    if let Some(orders) = &args.orders {
        run_orders(&mut rover, orders, &mut backend)?;
    }

    if args.interactive {
        run_interactive(&mut rover, &mut backend)?;
    }

    Ok(())
}
