// Library exports for testing
pub use config::GameConfig;
pub use entities::{
    Aabb, Alien, AlienFormation, Body, GameState, Particle, Player, Projectile, ProjectileOwner,
    Star, StarField, StarLayer,
};
pub use game::{GameAction, GameSession};

pub mod app;
pub mod config;
pub mod entities;
pub mod game;
pub mod input;
pub mod renderer;
