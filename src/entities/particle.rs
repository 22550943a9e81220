/// Short-lived cosmetic spark.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Seconds of life left.
    pub ttl: f32,
    pub glyph: char,
}

impl Particle {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, ttl: f32, glyph: char) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            ttl,
            glyph,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.x += self.vx * dt;
        self.y += self.vy * dt;
        self.ttl = (self.ttl - dt).max(0.0);
    }

    pub fn is_expired(&self) -> bool {
        self.ttl <= 0.0
    }
}

/// Explosion effect at the given position: eight sparks flying outward plus
/// a brief central flash.
pub fn explosion_burst(center_x: f32, center_y: f32) -> Vec<Particle> {
    const SPARK_SPEED: f32 = 120.0;

    let directions = [
        (0.0, 1.0),   // up
        (0.7, 0.7),   // up-right
        (1.0, 0.0),   // right
        (0.7, -0.7),  // down-right
        (0.0, -1.0),  // down
        (-0.7, -0.7), // down-left
        (-1.0, 0.0),  // left
        (-0.7, 0.7),  // up-left
    ];

    let mut particles = Vec::with_capacity(directions.len() + 1);
    for (dx, dy) in directions {
        particles.push(Particle::new(
            center_x,
            center_y,
            dx * SPARK_SPEED,
            dy * SPARK_SPEED,
            0.25,
            '*',
        ));
    }

    // Central flash, gone before the sparks.
    particles.push(Particle::new(center_x, center_y, 0.0, 0.0, 0.15, 'o'));

    particles
}
