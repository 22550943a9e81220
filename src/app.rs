use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::config::GameConfig;
use crate::entities::StarField;
use crate::game::GameSession;
use crate::input::InputManager;
use crate::renderer::{GameRenderer, RenderView};

/// The main application which owns the terminal loop and wires input,
/// simulation and rendering together.
pub struct App {
    running: bool,
    session: GameSession,
    starfield: StarField,
    /// Frames info
    last_frame_time: Instant,
    fps: u32,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new() -> Self {
        let config = GameConfig::default();
        let starfield = StarField::new(&config, &mut rand::rng());

        Self {
            running: true,
            session: GameSession::new(config),
            starfield,
            last_frame_time: Instant::now(),
            fps: 0,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            // Calculate FPS and the simulation step for this frame
            let now = Instant::now();
            let frame_time = now.duration_since(self.last_frame_time);
            self.last_frame_time = now;
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }
            let dt = frame_time.as_secs_f32();

            // Render the frame
            terminal.draw(|frame| {
                let config = self.session.config();
                let view = RenderView {
                    game_state: self.session.state(),
                    player: self.session.player(),
                    aliens: &self.session.formation().aliens,
                    alien_bullets: &self.session.formation().bullets,
                    player_bullets: self.session.player_bullets(),
                    particles: self.session.particles(),
                    stars: &self.starfield,
                    score: self.session.score(),
                    world_width: config.screen_width,
                    world_height: config.screen_height,
                    area: frame.area(),
                    fps: self.fps,
                };
                self.renderer.render(frame, &view);
            })?;

            // Poll input events and forward actions to the session
            self.input_manager.poll_events(&self.session.state())?;
            if self.input_manager.quit_requested() {
                self.running = false;
            }
            for action in self.input_manager.actions() {
                self.session.on_key_action(*action);
            }

            // Advance the world
            let screen_height = self.session.config().screen_height;
            self.starfield.update(dt, screen_height);
            self.session.on_update(dt);

            // Small sleep to maintain ~60 FPS and prevent CPU spinning
            std::thread::sleep(Duration::from_millis(16));
        }
        Ok(())
    }
}
