pub mod audio;
pub mod bullets;
pub mod fire_timer;
pub mod game;
pub mod input;
pub mod movement;
pub mod prelude;
pub mod spawn;
pub mod states;
pub mod targeting;
pub mod weapon;

pub use game::plugin as game_plugin;
pub use weapon::plugin as weapon_plugin;
