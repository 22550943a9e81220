mod alien;
mod body;
mod formation;
mod game_state;
mod particle;
mod player;
mod projectile;
mod starfield;

// Re-export all public types
pub use alien::Alien;
pub use body::{Aabb, Body};
pub use formation::AlienFormation;
pub use game_state::GameState;
pub use particle::{Particle, explosion_burst};
pub use player::Player;
pub use projectile::{Projectile, ProjectileOwner};
pub use starfield::{Star, StarField, StarLayer};
