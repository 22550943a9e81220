use super::body::Body;
use crate::config::GameConfig;

/// The player ship. Moves horizontally along the bottom of the screen and
/// never leaves it.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Current horizontal velocity, set by move/stop commands.
    pub vx: f32,
    pub lives: u32,
    /// Speed applied while a movement command is active.
    pub speed: f32,
    /// Right wall of the playfield.
    pub max_x: f32,
    /// Seconds of damage flash left.
    pub flash_timer: f32,
}

impl Player {
    pub const SIZE: f32 = 40.0;

    pub fn new(x: f32, y: f32, config: &GameConfig) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            lives: config.player_lives,
            speed: config.player_speed,
            max_x: config.screen_width,
            flash_timer: 0.0,
        }
    }

    /// Moves by the current velocity, then clamps the hitbox back onto the
    /// playfield. The velocity itself is left untouched.
    pub fn advance(&mut self, dt: f32) {
        self.x += self.vx * dt;

        let half = Self::SIZE / 2.0;
        self.x = self.x.clamp(half, self.max_x - half);

        if self.flash_timer > 0.0 {
            self.flash_timer = (self.flash_timer - dt).max(0.0);
        }
    }

    pub fn move_left(&mut self) {
        self.vx = -self.speed;
    }

    pub fn move_right(&mut self) {
        self.vx = self.speed;
    }

    pub fn stop(&mut self) {
        self.vx = 0.0;
    }

    /// Loses one life, saturating at zero.
    pub fn hit(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.flash_timer = 0.2;
    }

    pub fn is_flashing(&self) -> bool {
        self.flash_timer > 0.0
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }
}

impl Body for Player {
    fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn size(&self) -> (f32, f32) {
        (Self::SIZE, Self::SIZE)
    }
}
