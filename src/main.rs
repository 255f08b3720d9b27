//! Headless demo host for the orbit-dodge physics core
//!
//! Stands in for the real rendering/input host: builds a world, steps it
//! for a fixed number of ticks with an optional held thrust direction, and
//! prints the final state as JSON.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use orbit_dodge::consts::ENEMY_RADIUS;
use orbit_dodge::sim::tick;
use orbit_dodge::{TickInput, World, WorldConfig};

#[derive(Parser, Debug)]
#[command(name = "orbit-dodge", about = "Headless orbital-flight simulation")]
struct Args {
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Fixed timestep in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Enemies to spawn before the run
    #[arg(long, default_value_t = 0)]
    enemies: u32,

    /// Seed for deterministic spawn placement
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// World config as JSON (defaults otherwise)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated directions held for the whole run
    /// (up, down, left, right)
    #[arg(long)]
    thrust: Option<String>,
}

fn parse_thrust(arg: &str) -> Result<TickInput, String> {
    let mut input = TickInput::NONE;
    for token in arg.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token {
            "up" => input.up = true,
            "down" => input.down = true,
            "left" => input.left = true,
            "right" => input.right = true,
            other => return Err(format!("unknown direction '{other}'")),
        }
    }
    Ok(input)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config: WorldConfig = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => WorldConfig::default(),
    };

    let mut world = World::new(&config);
    let mut rng = Pcg32::seed_from_u64(args.seed);
    for _ in 0..args.enemies {
        if !world.spawn_enemy(&mut rng, ENEMY_RADIUS) {
            break;
        }
    }

    let input = match &args.thrust {
        Some(arg) => parse_thrust(arg)?,
        None => TickInput::NONE,
    };

    for n in 0..args.ticks {
        tick(&mut world, &input, args.dt);
        if n % 60 == 0 {
            info!(
                "t={:7.3}s player=({:+.4}, {:+.4}) |v|={:.4}",
                f64::from(n) * args.dt,
                world.player.position.x,
                world.player.position.y,
                world.player.velocity.length()
            );
        }
    }

    println!("{}", serde_json::to_string_pretty(&world)?);
    Ok(())
}
