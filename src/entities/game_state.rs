/// Top-level state of a session. Exactly one variant holds at a time;
/// `GameOver` and `Won` stick until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameState {
    Playing,
    GameOver,
    Won,
}
