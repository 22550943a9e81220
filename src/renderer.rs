use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::entities::{Alien, GameState, Particle, Player, Projectile, StarField, StarLayer};

/// Two rows, drawn with the hull on the ship's center line.
const PLAYER_SPRITE: [&str; 2] = [" /^\\ ", "<===>"];

/// One row per alien, keyed by spawn row.
const ALIEN_SPRITES: [&str; 3] = ["/MM\\", "<oo>", "{@@}"];

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub player: &'a Player,
    pub aliens: &'a [Alien],
    pub alien_bullets: &'a [Projectile],
    pub player_bullets: &'a [Projectile],
    pub particles: &'a [Particle],
    pub stars: &'a StarField,
    pub score: u32,
    pub world_width: f32,
    pub world_height: f32,
    pub area: Rect,
    pub fps: u32,
}

/// Maps world coordinates (origin bottom-left, y up) onto terminal cells
/// (origin top-left, y down).
struct Viewport {
    area: Rect,
    world_width: f32,
    world_height: f32,
}

impl Viewport {
    /// Cell for a world position, or `None` when it falls outside the
    /// visible area.
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if self.area.width == 0 || self.area.height == 0 {
            return None;
        }
        if !(0.0..self.world_width).contains(&x) || !(0.0..self.world_height).contains(&y) {
            return None;
        }

        let col = (x / self.world_width * self.area.width as f32) as u16;
        let row = ((self.world_height - y) / self.world_height * self.area.height as f32) as u16;

        Some((
            self.area.x + col.min(self.area.width - 1),
            self.area.y + row.min(self.area.height - 1),
        ))
    }
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer {}

impl GameRenderer {
    /// Creates a new GameRenderer
    pub fn new() -> Self {
        Self {}
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        match view.game_state {
            GameState::Playing => self.render_game(frame, view),
            GameState::GameOver => self.render_game_over(frame, view),
            GameState::Won => self.render_victory(frame, view),
        }
    }

    /// Renders the active gameplay screen
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let viewport = Viewport {
            area,
            world_width: view.world_width,
            world_height: view.world_height,
        };
        let buffer = frame.buffer_mut();

        // Background stars first so everything else draws over them
        for star in &view.stars.stars {
            if let Some((col, row)) = viewport.cell(star.x, star.y) {
                let (glyph, color) = match star.layer {
                    StarLayer::Far => (".", Color::DarkGray),
                    StarLayer::Mid => (".", Color::Gray),
                    StarLayer::Near => ("+", Color::White),
                };
                buffer.set_string(col, row, glyph, Style::default().fg(color));
            }
        }

        // Aliens, colored by spawn row
        for alien in view.aliens.iter().filter(|a| a.alive) {
            if let Some((col, row)) = viewport.cell(alien.x, alien.y) {
                let sprite = ALIEN_SPRITES[alien.alien_type % ALIEN_SPRITES.len()];
                let color = match alien.alien_type % ALIEN_SPRITES.len() {
                    0 => Color::Red,
                    1 => Color::Magenta,
                    _ => Color::Yellow,
                };
                draw_centered(
                    buffer,
                    area,
                    col,
                    row,
                    sprite,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                );
            }
        }

        // Player ship; flashes white right after taking a hit
        let player_style = if view.player.is_flashing() {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };
        if let Some((col, row)) = viewport.cell(view.player.x, view.player.y) {
            draw_centered(buffer, area, col, row, PLAYER_SPRITE[1], player_style);
            if row > area.y {
                draw_centered(buffer, area, col, row - 1, PLAYER_SPRITE[0], player_style);
            }
        }

        // Projectiles
        for bullet in view.player_bullets {
            if let Some((col, row)) = viewport.cell(bullet.x, bullet.y) {
                buffer.set_string(col, row, "|", Style::default().fg(Color::Yellow));
            }
        }
        for bullet in view.alien_bullets {
            if let Some((col, row)) = viewport.cell(bullet.x, bullet.y) {
                buffer.set_string(col, row, "!", Style::default().fg(Color::Red));
            }
        }

        // Explosion particles fade as their lifetime burns down
        for particle in view.particles {
            if let Some((col, row)) = viewport.cell(particle.x, particle.y) {
                let color = if particle.ttl > 0.15 {
                    Color::Red
                } else if particle.ttl > 0.08 {
                    Color::LightRed
                } else {
                    Color::Yellow
                };
                buffer.set_string(
                    col,
                    row,
                    particle.glyph.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                );
            }
        }

        // Stats overlay at the top
        let live_aliens = view.aliens.iter().filter(|a| a.alive).count();
        let stats = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Lives: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.player.lives),
                if view.player.lives > 2 {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else if view.player.lives == 2 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                },
            ),
            Span::styled("  Aliens: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", live_aliens),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  FPS: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.fps),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let stats_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        };

        frame.render_widget(Paragraph::new(stats), stats_area);

        // Controls hint at bottom
        let controls = Line::from(vec![Span::styled(
            "[A/D or Arrows: Move] [Space: Fire] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);

        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };

        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    /// Renders the game over screen
    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let game_over_text = vec![
            Line::from(""),
            Line::from("╔═══════════════════════════╗").centered().red(),
            Line::from("║        GAME OVER!         ║")
                .centered()
                .red()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().red(),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(""),
            Line::from("Press R to restart").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            view.area,
        );
    }

    /// Renders the victory screen
    fn render_victory(&self, frame: &mut Frame, view: &RenderView) {
        let victory_text = vec![
            Line::from(""),
            Line::from("╔═══════════════════════════╗").centered().green(),
            Line::from("║         YOU WIN!          ║")
                .centered()
                .green()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().green(),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(""),
            Line::from("Press R to restart").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        frame.render_widget(
            Paragraph::new(victory_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            view.area,
        );
    }
}

/// Writes `text` centered on (col, row), skipping sprites that would spill
/// past the edge of the area.
fn draw_centered(buffer: &mut Buffer, area: Rect, col: u16, row: u16, text: &str, style: Style) {
    let width = text.len() as u16;
    let start = col.saturating_sub(width / 2).max(area.x);
    if start + width <= area.x + area.width && row < area.y + area.height {
        buffer.set_string(start, row, text, style);
    }
}
