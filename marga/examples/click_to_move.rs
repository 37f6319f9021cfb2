//! Click-to-move simulation
//!
//! Loads a grid from the config file, plans a path for each requested
//! destination and steps the agent at a fixed tick rate, printing the
//! position as it goes.
//!
//! Usage:
//!   cargo run --example click_to_move -- --to 15.5,12.5
//!   cargo run --example click_to_move -- --to 15.5,12.5 --to 2.5,18.5
//!
//! Enable debug logging to see planner output:
//!   RUST_LOG=debug cargo run --example click_to_move -- --to 15.5,12.5

use std::path::Path;

use clap::Parser;
use glam::Vec3;
use marga::{AStarPlanner, Agent, MargaConfig};

/// Click-to-move example
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "configs/config.yaml")]
    config: String,

    /// Start position as "x,z"
    #[arg(long, default_value = "1.5,1.5", value_parser = parse_xz)]
    from: (f32, f32),

    /// Destination as "x,z" (repeat for a sequence of clicks)
    #[arg(long, required = true, value_parser = parse_xz)]
    to: Vec<(f32, f32)>,

    /// Simulation tick rate in Hz
    #[arg(long, default_value = "60")]
    hz: f32,

    /// Print the position every N ticks
    #[arg(long, default_value = "30")]
    progress_interval: usize,

    /// Print the ASCII grid before starting
    #[arg(long)]
    show_grid: bool,
}

fn parse_xz(s: &str) -> Result<(f32, f32), String> {
    let (x, z) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,z\", got {:?}", s))?;
    let x = x.trim().parse::<f32>().map_err(|e| e.to_string())?;
    let z = z.trim().parse::<f32>().map_err(|e| e.to_string())?;
    Ok((x, z))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config_path = Path::new(&args.config);
    let config = if config_path.exists() {
        MargaConfig::load(config_path).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config: {}, using defaults", e);
            MargaConfig::default()
        })
    } else {
        println!("Config not found, using defaults");
        MargaConfig::default()
    };

    let mut grid = match config.build_grid() {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Invalid grid: {}", e);
            std::process::exit(1);
        }
    };
    println!(
        "Grid: {}x{} cells, {} blocked",
        grid.width(),
        grid.height(),
        grid.blocked_count()
    );
    if args.show_grid {
        print!("{}", grid.to_ascii());
    }

    let start = Vec3::new(args.from.0, grid.origin().y, args.from.1);
    let mut agent = match Agent::from_config(start, &config) {
        Ok(agent) => agent,
        Err(e) => {
            eprintln!("Invalid agent settings: {}", e);
            std::process::exit(1);
        }
    };

    let dt = 1.0 / args.hz.max(1.0);
    let mut planner = AStarPlanner::new(&mut grid, config.to_astar_config());

    for (x, z) in args.to {
        let destination = Vec3::new(x, start.y, z);
        println!("\nClick at ({:.2}, {:.2})", x, z);

        match agent.request_path(&mut planner, destination) {
            Ok(count) => println!(
                "  path: {} cells -> {} waypoints",
                agent.path().len(),
                count
            ),
            Err(e) => {
                println!("  {} [{}], staying put", e, e.code());
                continue;
            }
        }

        let mut ticks = 0usize;
        loop {
            let result = agent.tick(dt);
            ticks += 1;
            if ticks % args.progress_interval.max(1) == 0 || result.path_complete {
                let p = agent.position();
                println!(
                    "  t={:6.2}s  pos=({:6.2}, {:6.2})  waypoint {}/{}",
                    ticks as f32 * dt,
                    p.x,
                    p.z,
                    result.waypoint_idx,
                    agent.waypoints().len()
                );
            }
            if result.path_complete {
                break;
            }
        }
    }
}
