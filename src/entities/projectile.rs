use super::body::Body;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileOwner {
    Player,
    Alien,
}

/// A bullet in flight. The owner fixes the direction of travel: player
/// shots go up, alien shots go down.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity; the sign encodes the direction.
    pub vy: f32,
    pub owner: ProjectileOwner,
    pub alive: bool,
}

impl Projectile {
    pub const SIZE: f32 = 8.0;

    pub fn new(x: f32, y: f32, speed: f32, owner: ProjectileOwner) -> Self {
        let vy = match owner {
            ProjectileOwner::Player => speed,
            ProjectileOwner::Alien => -speed,
        };

        Self {
            x,
            y,
            vy,
            owner,
            alive: true,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.y += self.vy * dt;
    }

    /// True once the bullet has fully left the vertical extent of the
    /// screen, in either direction.
    pub fn is_off_screen(&self, screen_height: f32) -> bool {
        self.bottom() > screen_height || self.top() < 0.0
    }
}

impl Body for Projectile {
    fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn size(&self) -> (f32, f32) {
        (Self::SIZE, Self::SIZE)
    }
}
