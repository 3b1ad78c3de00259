pub mod backend;
pub mod plugin;
pub mod systems;

pub use backend::*;
pub use plugin::plugin;
pub use systems::*;
