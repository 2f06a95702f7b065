use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::{FutureExt, StreamExt};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;

use crate::clock::FrameClock;
use crate::game::{FrameOutcome, GameConfig, GameSession};
use crate::input::{FrameInput, InputHandler};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Interactive terminal game: owns the session and its I/O collaborators
pub struct PlayMode {
    session: GameSession,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    input: FrameInput,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let session = GameSession::new(config).context("Failed to start game session")?;

        Ok(Self {
            session,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            input: FrameInput::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!("game started");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!("game stopped");
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut clock = FrameClock::new(self.session.config().frame_duration());

        loop {
            let elapsed = tokio::select! {
                elapsed = clock.tick() => elapsed,

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                    Duration::ZERO
                }
            };

            // Drain terminal events that arrived since the last frame
            while let Some(maybe_event) = event_stream.next().now_or_never() {
                match maybe_event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                    None => {
                        self.should_quit = true;
                        break;
                    }
                }
            }

            let input = self.input.take();
            if input.quit {
                self.should_quit = true;
            }
            if self.should_quit {
                info!("quit requested");
                break;
            }
            if input.restart {
                self.restart();
            }

            let outcome = self.update_game(elapsed, &input)?;
            self.metrics.record(&outcome, self.session.snake().len());
            self.metrics.update();

            let scene = self.session.render_frame();
            terminal
                .draw(|frame| {
                    self.renderer.render(frame, &scene, &self.metrics);
                })
                .context("Failed to draw frame")?;
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.input.record(action);
        }
    }

    fn update_game(&mut self, elapsed: Duration, input: &FrameInput) -> Result<FrameOutcome> {
        self.session
            .frame(elapsed, input.direction())
            .context("Game update failed")
    }

    fn restart(&mut self) {
        self.session.restart();
        self.metrics.on_restart();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
