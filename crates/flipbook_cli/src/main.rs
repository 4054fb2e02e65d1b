//! Flipbook CLI
//!
//! Inspect sprite sheets and step animation scenes without a window.

use anyhow::Result;
use clap::{Parser, Subcommand};
use flipbook_animation::{Region, SliceOrder, SpriteSheet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

#[derive(Parser)]
#[command(name = "flipbook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Flipbook sprite animation tools", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a scene file and list its animations
    Check {
        /// Scene TOML file
        scene: PathBuf,
    },

    /// Advance every animation of a scene and print the frame shown each tick
    Simulate {
        /// Scene TOML file
        scene: PathBuf,

        /// Number of ticks to run
        #[arg(short, long, default_value = "10")]
        ticks: u32,

        /// Time added on each tick
        #[arg(short, long, default_value = "1.0")]
        step: f32,
    },

    /// Print the cells of a sprite sheet grid
    Slice {
        /// Sheet width in pixels
        #[arg(long)]
        width: u32,

        /// Sheet height in pixels
        #[arg(long)]
        height: u32,

        /// Number of cells per row
        #[arg(short, long, default_value = "1")]
        columns: u32,

        /// Number of cells per column
        #[arg(short, long, default_value = "1")]
        rows: u32,

        /// Group cells by column instead of by row
        #[arg(long)]
        columns_first: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Check { scene } => cmd_check(&scene),

        Commands::Simulate { scene, ticks, step } => cmd_simulate(&scene, ticks, step),

        Commands::Slice {
            width,
            height,
            columns,
            rows,
            columns_first,
        } => cmd_slice(width, height, columns, rows, columns_first),
    }
}

fn cmd_check(scene: &Path) -> Result<()> {
    let config = config::load_scene(scene)?;
    let manager = config.build()?;

    info!(
        "{}: {} animations on a {}x{} sheet",
        scene.display(),
        manager.len(),
        config.sheet.width,
        config.sheet.height
    );

    for (name, animation) in manager.iter() {
        println!(
            "{:<16} {:>3} frames  cycle {:<8} start {}",
            name,
            animation.frame_count(),
            animation.total_duration(),
            animation.starting_index()
        );
    }

    Ok(())
}

fn cmd_simulate(scene: &Path, ticks: u32, step: f32) -> Result<()> {
    let config = config::load_scene(scene)?;
    let mut manager = config.build()?;

    info!(
        "Simulating {} animations for {} ticks of {}",
        manager.len(),
        ticks,
        step
    );

    for tick in 1..=ticks {
        manager.play_all(step)?;

        for (name, animation) in manager.iter() {
            println!(
                "{:>4}  {:<16} #{:<3} {}",
                tick,
                name,
                animation.current_index(),
                format_region(animation.current_frame())
            );
        }
    }

    debug!("Simulation finished");
    Ok(())
}

fn cmd_slice(width: u32, height: u32, columns: u32, rows: u32, columns_first: bool) -> Result<()> {
    let order = if columns_first {
        SliceOrder::ColumnsFirst
    } else {
        SliceOrder::RowsFirst
    };

    let groups = SpriteSheet::new(width, height).slice_grid(columns, rows, order)?;
    for (group_index, group) in groups.iter().enumerate() {
        for (cell_index, region) in group.iter().enumerate() {
            println!("[{}][{}] {}", group_index, cell_index, format_region(region));
        }
    }

    Ok(())
}

fn format_region(region: &Region) -> String {
    format!(
        "{}x{} at ({}, {})",
        region.width, region.height, region.x, region.y
    )
}
