use super::body::Body;

/// One unit of the invading formation.
#[derive(Debug, Clone)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Row the alien spawned in; picks the sprite, nothing else.
    pub alien_type: usize,
    pub alive: bool,
}

impl Alien {
    pub const SIZE: f32 = 30.0;

    pub fn new(x: f32, y: f32, alien_type: usize, speed: f32) -> Self {
        Self {
            x,
            y,
            vx: speed,
            vy: 0.0,
            alien_type,
            alive: true,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.x += self.vx * dt;
        self.y += self.vy * dt;
    }

    /// Steps down one rank and reverses horizontal direction.
    pub fn drop_and_reverse(&mut self, drop_distance: f32) {
        self.y -= drop_distance;
        self.vx = -self.vx;
    }
}

impl Body for Alien {
    fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn size(&self) -> (f32, f32) {
        (Self::SIZE, Self::SIZE)
    }
}
