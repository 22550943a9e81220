use crate::config::GameConfig;
use crate::entities::{
    AlienFormation, Body, GameState, Particle, Player, Projectile, ProjectileOwner,
    explosion_burst,
};

/// Height of the player ship's center above the bottom of the screen.
const PLAYER_SPAWN_Y: f32 = 50.0;

/// Semantic commands the session accepts. The input layer produces these
/// from key events; tests can feed them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeftPressed,
    MoveLeftReleased,
    MoveRightPressed,
    MoveRightReleased,
    Fire,
    Restart,
}

/// One complete game: the player, the alien formation, every shot in
/// flight, and the score/state bookkeeping. Owns all the rules; the
/// terminal layer only feeds it actions and a time step.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    player: Player,
    formation: AlienFormation,
    player_bullets: Vec<Projectile>,
    particles: Vec<Particle>,
    score: u32,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let player = Player::new(config.screen_width / 2.0, PLAYER_SPAWN_Y, &config);
        let formation = AlienFormation::create_formation(&config);

        Self {
            config,
            state: GameState::Playing,
            player,
            formation,
            player_bullets: Vec::new(),
            particles: Vec::new(),
            score: 0,
        }
    }

    /// Throws the current run away and starts a fresh one with the same
    /// configuration.
    pub fn setup(&mut self) {
        *self = Self::new(self.config.clone());
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn formation(&self) -> &AlienFormation {
        &self.formation
    }

    pub fn player_bullets(&self) -> &[Projectile] {
        &self.player_bullets
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Applies one input command. Movement and fire are ignored once the
    /// session has ended; `Restart` works from any state.
    pub fn on_key_action(&mut self, action: GameAction) {
        if action == GameAction::Restart {
            self.setup();
            return;
        }

        if self.state != GameState::Playing {
            return;
        }

        match action {
            GameAction::MoveLeftPressed => self.player.move_left(),
            GameAction::MoveRightPressed => self.player.move_right(),
            // A release only stops the ship while it still moves in the
            // released direction; stale releases are ignored.
            GameAction::MoveLeftReleased => {
                if self.player.vx < 0.0 {
                    self.player.stop();
                }
            }
            GameAction::MoveRightReleased => {
                if self.player.vx > 0.0 {
                    self.player.stop();
                }
            }
            GameAction::Fire => self.fire_player_bullet(),
            GameAction::Restart => {}
        }
    }

    /// Runs one simulation tick. Does nothing once the session has ended.
    pub fn on_update(&mut self, dt: f32) {
        if self.state != GameState::Playing {
            return;
        }

        self.player.advance(dt);

        self.formation.update(dt, &self.config);
        self.formation.maybe_shoot(&self.config, &mut rand::rng());

        for bullet in &mut self.player_bullets {
            bullet.advance(dt);
        }
        self.player_bullets
            .retain(|b| !b.is_off_screen(self.config.screen_height));

        for particle in &mut self.particles {
            particle.advance(dt);
        }
        self.particles.retain(|p| !p.is_expired());

        self.resolve_collisions();
        self.check_game_state();
    }

    /// Spawns a shot from the ship's nose unless the in-flight cap has been
    /// reached; at the cap the command is silently dropped.
    fn fire_player_bullet(&mut self) {
        if self.player_bullets.len() >= self.config.max_player_bullets {
            return;
        }

        self.player_bullets.push(Projectile::new(
            self.player.x,
            self.player.top(),
            self.config.player_bullet_speed,
            ProjectileOwner::Player,
        ));
    }

    /// Applies every collision outcome for this tick, then compacts the
    /// bullet and alien lists.
    fn resolve_collisions(&mut self) {
        // Player shots against the grid, both in creation order. The first
        // overlap consumes the shot, so one shot kills at most one alien.
        for bullet in &mut self.player_bullets {
            if !bullet.alive {
                continue;
            }
            for index in 0..self.formation.aliens.len() {
                let alien = &self.formation.aliens[index];
                if !alien.alive || !bullet.collides_with(alien) {
                    continue;
                }

                let burst = explosion_burst(alien.x, alien.y);
                self.formation.remove_alien(index);
                bullet.alive = false;
                self.score += self.config.kill_score;
                self.particles.extend(burst);
                break;
            }
        }

        // Alien shots against the player. Every hit this tick lands before
        // the lives check.
        for bullet in &mut self.formation.bullets {
            if bullet.alive && bullet.collides_with(&self.player) {
                bullet.alive = false;
                self.player.hit();
            }
        }
        if !self.player.is_alive() {
            self.state = GameState::GameOver;
        }

        // An alien touching the ship ends the run outright.
        for index in 0..self.formation.aliens.len() {
            let alien = &self.formation.aliens[index];
            if alien.alive && alien.collides_with(&self.player) {
                self.particles.extend(explosion_burst(alien.x, alien.y));
                self.state = GameState::GameOver;
                break;
            }
        }

        self.player_bullets.retain(|b| b.alive);
        self.formation.bullets.retain(|b| b.alive);
        self.formation.sweep_removed();
    }

    /// Win/lose transitions. Losing conditions take precedence over the
    /// win, so a tick that triggers both ends in `GameOver`.
    fn check_game_state(&mut self) {
        if self.state != GameState::Playing {
            return;
        }

        if self.formation.reached_bottom(self.config.bottom_threshold) {
            self.state = GameState::GameOver;
        } else if self.formation.is_empty() {
            self.state = GameState::Won;
        }
    }
}
