use bevy::prelude::*;
use clap::Parser;

use scattershot::game::resources::DemoSettings;
use scattershot::states::GameState;
use scattershot::weapon::components::{FireMode, WeaponConfig};
use scattershot::{audio, bullets, game, input, spawn, targeting, weapon};

/// Firing-range demo for the weapon module.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Single-shot fire rate in rounds per minute.
    #[arg(long, default_value_t = 300.0)]
    fire_rate: f32,

    /// Spread-mode fire rate in rounds per minute.
    #[arg(long, default_value_t = 90.0)]
    spread_fire_rate: f32,

    /// Bullets per spread burst.
    #[arg(long, default_value_t = 6)]
    spread_count: u32,

    /// Full spread fan angle in degrees.
    #[arg(long, default_value_t = 30.0)]
    spread_angle: f32,

    /// Start in spread mode instead of single-shot.
    #[arg(long)]
    spread: bool,

    /// Reuse pooled bullet entities instead of spawning fresh ones.
    #[arg(long)]
    pooled: bool,
}

fn main() {
    let args = Args::parse();

    let config = WeaponConfig {
        fire_rate_rpm: args.fire_rate,
        spread_fire_rate_rpm: args.spread_fire_rate,
        spread_bullet_count: args.spread_count,
        spread_angle_degrees: args.spread_angle,
        mode: if args.spread {
            FireMode::Spread
        } else {
            FireMode::Single
        },
        ..WeaponConfig::default()
    };

    App::new()
        .add_plugins(DefaultPlugins)
        .init_state::<GameState>()
        .insert_resource(DemoSettings {
            config,
            pooled_spawning: args.pooled,
        })
        .add_plugins((
            game::plugin,
            input::plugin,
            targeting::plugin,
            weapon::plugin,
            bullets::plugin,
            spawn::plugin,
            audio::plugin,
        ))
        .run();
}
