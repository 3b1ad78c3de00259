use bevy::prelude::*;

/// Top-level simulation state. Paused freezes every gameplay system while
/// the pause input itself keeps running.
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug, Hash, States)]
pub enum GameState {
    #[default]
    InGame,
    Paused,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_state_defaults_to_in_game() {
        assert_eq!(GameState::default(), GameState::InGame);
    }

    #[test]
    fn game_state_variants_are_distinct() {
        assert_ne!(GameState::InGame, GameState::Paused);
    }
}
