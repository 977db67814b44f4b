use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::game::{GameConfig, GameEngine};
use crate::input::{InputHandler, InputOutcome};
use crate::metrics::GameMetrics;
use crate::render::{Canvas, Renderer, draw_frame};

pub struct HumanMode {
    engine: GameEngine,
    canvas: Canvas,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    /// Key presses received since the last tick
    pending_keys: Vec<KeyEvent>,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let canvas = Canvas::new(config.screen_width, config.screen_height, config.grid_size);

        Self {
            engine: GameEngine::new(config),
            canvas,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            pending_keys: Vec::new(),
        }
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

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal; a game loop error takes precedence
        let cleanup = self.cleanup_terminal(&mut terminal);
        result.and(cleanup)
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = self.engine.config().tick_interval();
        let mut tick_timer = interval(tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            speed = self.engine.config().speed,
            width = self.engine.config().screen_width,
            height = self.engine.config().screen_height,
            "Game started"
        );

        loop {
            tokio::select! {
                // Queue terminal events; they are applied at the next tick
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.queue_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => {
                            info!("Input stream closed, quitting");
                            break;
                        }
                    }
                }

                _ = tick_timer.tick() => {
                    if self.run_tick() == InputOutcome::Quit {
                        info!("Quit requested");
                        break;
                    }
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.canvas, self.engine.snake.len(), &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted");
                    break;
                }
            }
        }

        Ok(())
    }

    fn queue_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind == KeyEventKind::Press {
                self.pending_keys.push(key);
            }
        }
    }

    /// Drain input, advance the game one tick and repaint the canvas
    fn run_tick(&mut self) -> InputOutcome {
        let keys = std::mem::take(&mut self.pending_keys);
        if !keys.is_empty() {
            debug!(count = keys.len(), "Processing key presses");
        }
        if self.input_handler.process(keys, &mut self.engine.snake) == InputOutcome::Quit {
            return InputOutcome::Quit;
        }

        let info = self.engine.tick();
        self.metrics.on_tick(info, self.engine.snake.length);

        draw_frame(&self.engine, &mut self.canvas);
        InputOutcome::Continue
    }

    /// Run every restore step, reporting the first one that failed
    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let raw_mode = disable_raw_mode().context("Failed to disable raw mode");
        let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen");
        let cursor = terminal.show_cursor().context("Failed to show cursor");
        first_error([raw_mode, screen, cursor])
    }
}

/// Keep the first error out of a set of results that all had to be attempted
fn first_error<I>(results: I) -> Result<()>
where
    I: IntoIterator<Item = Result<()>>,
{
    results.into_iter().collect()
}
