/// Tuning for a single game session. Built once at startup and passed by
/// reference to whatever needs it; nothing mutates it after construction.
///
/// All distances are world units with the origin at the bottom-left corner
/// and y pointing up. All speeds are world units per second.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Width of the playfield in world units.
    pub screen_width: f32,
    /// Height of the playfield in world units.
    pub screen_height: f32,
    /// Horizontal speed of the player ship.
    pub player_speed: f32,
    /// Lives the player starts with.
    pub player_lives: u32,
    /// Upward speed of player shots.
    pub player_bullet_speed: f32,
    /// Downward speed of alien shots.
    pub alien_bullet_speed: f32,
    /// Rows in the starting formation grid.
    pub alien_rows: usize,
    /// Columns in the starting formation grid.
    pub alien_columns: usize,
    /// Gap between neighbouring aliens, on both axes.
    pub alien_spacing: f32,
    /// Horizontal speed of the formation.
    pub alien_speed: f32,
    /// How far the formation descends when it reverses at a wall.
    pub alien_drop_distance: f32,
    /// Chance per tick that some alien fires.
    pub alien_shoot_chance: f32,
    /// Points awarded per destroyed alien.
    pub kill_score: u32,
    /// Player shots allowed in flight at once.
    pub max_player_bullets: usize,
    /// Height below which a descending alien ends the game.
    pub bottom_threshold: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            player_speed: 300.0,
            player_lives: 3,
            player_bullet_speed: 500.0,
            alien_bullet_speed: 300.0,
            alien_rows: 5,
            alien_columns: 10,
            alien_spacing: 60.0,
            alien_speed: 100.0,
            alien_drop_distance: 50.0,
            alien_shoot_chance: 0.02,
            kill_score: 10,
            max_player_bullets: 3,
            bottom_threshold: 80.0,
        }
    }
}
