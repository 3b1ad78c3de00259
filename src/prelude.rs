pub use bevy::prelude::*;

pub use crate::states::*;

// Re-export components and resources
pub use crate::bullets::components::*;
pub use crate::fire_timer::{FireTimer, FireTimerError};
pub use crate::game::resources::*;
pub use crate::game::sets::GameSet;
pub use crate::input::components::*;
pub use crate::movement::components::*;
pub use crate::spawn::backend::*;
pub use crate::targeting::components::*;
pub use crate::weapon::components::*;
pub use crate::weapon::events::*;

// Re-export systems
pub use crate::bullets::systems::*;
pub use crate::input::systems::*;
pub use crate::spawn::systems::*;
pub use crate::targeting::systems::*;
pub use crate::weapon::systems::*;
