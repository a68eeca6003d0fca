//! Headless driver for the n-body core
//!
//! Runs a preset at a fixed frame rate without a window and logs what a
//! renderer would show. Pause, reset and stats requests are scripted by frame
//! number instead of read from a keyboard.
//!
//! Logging goes through `env_logger`; use `RUST_LOG=debug` to see every
//! collision.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use space_engine::render_data::instance_bytes;
use space_engine::{scenarios, Controls, FrameInput, Scenario, Simulation, Vector};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    BouncingBalls,
    OrbitingBalls,
    SolarSystem,
    ScaledSolarSystem,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario to run.
    #[arg(short, long, value_enum, default_value_t = Preset::SolarSystem)]
    scenario: Preset,

    /// Number of frames to simulate.
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Frames per second of the simulated display.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Multiplier on the scenario's own time scale.
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Log per-body stats every N frames (0 disables).
    #[arg(short, long, default_value_t = 120)]
    report_every: u64,

    /// Frames at which the pause state toggles.
    #[arg(long, value_delimiter = ',')]
    toggle_pause_at: Vec<u64>,

    /// Frames at which the scenario is reset.
    #[arg(long, value_delimiter = ',')]
    reset_at: Vec<u64>,
}

struct App<V> {
    simulation: Simulation<V>,
    controls: Controls,
}

impl<V: Vector> App<V> {
    fn new(scenario: Scenario<V>, speed: f64) -> Result<Self> {
        let controls = Controls::new(scenario.time_scale * speed);
        let simulation = Simulation::new(scenario).context("scenario failed validation")?;

        Ok(Self {
            simulation,
            controls,
        })
    }

    fn input_for(&self, frame: u64, args: &Args) -> FrameInput {
        FrameInput {
            toggle_pause: args.toggle_pause_at.contains(&frame),
            reset: args.reset_at.contains(&frame),
            report: args.report_every > 0 && frame > 0 && frame % args.report_every == 0,
            ..Default::default()
        }
    }

    fn run(&mut self, args: &Args) {
        let frame_dt = 1.0 / args.fps;
        let initial_energy = self.simulation.total_energy();

        for frame in 0..args.frames {
            let input = self.input_for(frame, args);
            if let Some(stats) = self.controls.update(&mut self.simulation, input, frame_dt) {
                info!(
                    "=== Frame {} | t = {:.3} | {} collisions ===",
                    frame,
                    self.simulation.elapsed(),
                    self.simulation.collision_count()
                );
                for stat in stats {
                    info!(
                        "Body {}: speed = {:.4e}, distance from center = {:.4e}",
                        stat.id, stat.speed, stat.distance
                    );
                }
            }
        }

        let final_energy = self.simulation.total_energy();
        info!(
            "Finished '{}' after {} sub-steps: energy {:.6e} -> {:.6e}, center of mass {:?}",
            self.simulation.scenario_name(),
            self.simulation.substep_count(),
            initial_energy,
            final_energy,
            self.simulation.center_of_mass()
        );

        let instances = self.simulation.instances();
        let trail_points: usize = self.simulation.bodies().iter().map(|b| b.trail().len()).sum();
        let trail_samples: u64 = self
            .simulation
            .bodies()
            .iter()
            .map(|b| b.trail().total_written())
            .sum();
        info!(
            "Render data: {} instance bytes, {} trail points kept of {} sampled",
            instance_bytes(&instances).len(),
            trail_points,
            trail_samples
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    anyhow::ensure!(args.fps > 0.0, "fps must be positive, got {}", args.fps);
    anyhow::ensure!(args.speed > 0.0, "speed must be positive, got {}", args.speed);

    match args.scenario {
        Preset::BouncingBalls => App::new(scenarios::bouncing_balls(), args.speed)?.run(&args),
        Preset::OrbitingBalls => App::new(scenarios::orbiting_balls(), args.speed)?.run(&args),
        Preset::SolarSystem => App::new(scenarios::solar_system(), args.speed)?.run(&args),
        Preset::ScaledSolarSystem => {
            App::new(scenarios::scaled_solar_system(), args.speed)?.run(&args)
        }
    }

    Ok(())
}
