use rand::Rng;
use rand::seq::IteratorRandom;

use super::alien::Alien;
use super::body::Body;
use super::projectile::{Projectile, ProjectileOwner};
use crate::config::GameConfig;

/// Gap between the top alien row and the top of the screen.
const TOP_MARGIN: f32 = 100.0;

/// The alien grid plus every shot the aliens have fired.
///
/// All live aliens share one horizontal velocity; when any of them touches a
/// wall the whole grid drops and reverses in the same tick, so it stays in
/// lockstep for the entire session.
#[derive(Debug, Clone, Default)]
pub struct AlienFormation {
    /// Row-major, row 0 at the top. Order is creation order and decides
    /// which alien a bullet hits first.
    pub aliens: Vec<Alien>,
    pub bullets: Vec<Projectile>,
}

impl AlienFormation {
    /// Builds the starting grid: `alien_rows` x `alien_columns`, centered
    /// horizontally, everything moving right.
    pub fn create_formation(config: &GameConfig) -> Self {
        let mut aliens = Vec::with_capacity(config.alien_rows * config.alien_columns);
        let grid_width = config.alien_columns.saturating_sub(1) as f32 * config.alien_spacing;
        let start_x = (config.screen_width - grid_width) / 2.0;
        let start_y = config.screen_height - TOP_MARGIN;

        for row in 0..config.alien_rows {
            for column in 0..config.alien_columns {
                let x = start_x + column as f32 * config.alien_spacing;
                let y = start_y - row as f32 * config.alien_spacing;
                aliens.push(Alien::new(x, y, row, config.alien_speed));
            }
        }

        Self {
            aliens,
            bullets: Vec::new(),
        }
    }

    /// Advances the grid and the alien shots by one tick.
    ///
    /// The wall test runs once over the pre-move positions; when it trips,
    /// every live alien drops and reverses before moving.
    pub fn update(&mut self, dt: f32, config: &GameConfig) {
        let hit_edge = self
            .aliens
            .iter()
            .filter(|a| a.alive)
            .any(|a| a.right() >= config.screen_width || a.left() <= 0.0);

        for alien in self.aliens.iter_mut().filter(|a| a.alive) {
            if hit_edge {
                alien.drop_and_reverse(config.alien_drop_distance);
            }
            alien.advance(dt);
        }

        for bullet in &mut self.bullets {
            bullet.advance(dt);
        }
        self.bullets
            .retain(|b| !b.is_off_screen(config.screen_height));
    }

    /// Rolls the per-tick firing chance. On success a random live alien
    /// fires one shot downward from its lower edge; the new bullet is
    /// returned. `None` means the roll failed or nobody is left to shoot.
    pub fn maybe_shoot(&mut self, config: &GameConfig, rng: &mut impl Rng) -> Option<&Projectile> {
        if rng.random::<f32>() >= config.alien_shoot_chance {
            return None;
        }

        let shooter = self.aliens.iter().filter(|a| a.alive).choose(rng)?;
        let (x, y) = (shooter.x, shooter.bottom());

        self.bullets.push(Projectile::new(
            x,
            y,
            config.alien_bullet_speed,
            ProjectileOwner::Alien,
        ));
        self.bullets.last()
    }

    /// Marks the alien at `index` dead. It stops moving, shooting, and
    /// colliding immediately; `sweep_removed` drops it at the end of the
    /// tick. Out-of-range indices are ignored.
    pub fn remove_alien(&mut self, index: usize) {
        if let Some(alien) = self.aliens.get_mut(index) {
            alien.alive = false;
        }
    }

    /// Compacts the grid, dropping everything marked by `remove_alien`.
    pub fn sweep_removed(&mut self) {
        self.aliens.retain(|a| a.alive);
    }

    pub fn live_count(&self) -> usize {
        self.aliens.iter().filter(|a| a.alive).count()
    }

    /// True once no live alien remains.
    pub fn is_empty(&self) -> bool {
        !self.aliens.iter().any(|a| a.alive)
    }

    /// True once any live alien has descended below `threshold_y`.
    pub fn reached_bottom(&self, threshold_y: f32) -> bool {
        self.aliens
            .iter()
            .filter(|a| a.alive)
            .any(|a| a.bottom() < threshold_y)
    }
}
