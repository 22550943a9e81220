use rand::Rng;

use crate::config::GameConfig;

/// Parallax depth of a star. Far stars are dim and slow, near stars bright
/// and fast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StarLayer {
    Far,
    Mid,
    Near,
}

impl StarLayer {
    pub fn speed(self) -> f32 {
        match self {
            StarLayer::Far => 15.0,
            StarLayer::Mid => 40.0,
            StarLayer::Near => 80.0,
        }
    }

    fn count(self) -> usize {
        match self {
            StarLayer::Far => 60,
            StarLayer::Mid => 40,
            StarLayer::Near => 20,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub layer: StarLayer,
}

/// Scrolling backdrop. Stars drift toward the bottom of the screen and wrap
/// back to the top. Purely cosmetic; the simulation never sees it.
#[derive(Debug, Clone)]
pub struct StarField {
    pub stars: Vec<Star>,
}

impl StarField {
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut stars = Vec::new();
        for layer in [StarLayer::Far, StarLayer::Mid, StarLayer::Near] {
            for _ in 0..layer.count() {
                stars.push(Star {
                    x: rng.random_range(0.0..config.screen_width),
                    y: rng.random_range(0.0..config.screen_height),
                    speed: layer.speed(),
                    layer,
                });
            }
        }
        Self { stars }
    }

    pub fn update(&mut self, dt: f32, screen_height: f32) {
        for star in &mut self.stars {
            star.y -= star.speed * dt;
            if star.y < 0.0 {
                star.y += screen_height;
            }
        }
    }
}
