//! Interactive terminal play
//!
//! The frame interval stands in for the display refresh: every interval
//! tick is one frame handed to the [`FrameScheduler`], which decides when
//! the simulation actually advances and the board is redrawn.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::game::{FrameScheduler, GameConfig, GameEngine, Pacing};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::{paint, CellCanvas, Renderer};

pub struct PlayMode {
    engine: GameEngine,
    scheduler: FrameScheduler,
    canvas: CellCanvas,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        let scheduler = FrameScheduler::new(Pacing::from_config(&config));
        let mut canvas = CellCanvas::new(config.cell_size);
        let engine = GameEngine::new(config);
        paint(engine.state(), &mut canvas);

        Self {
            engine,
            scheduler,
            canvas,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
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

        info!(
            cols = self.engine.config().cols,
            rows = self.engine.config().rows,
            pacing = ?self.scheduler.pacing(),
            "starting play session"
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            ticks = self.metrics.ticks,
            resets = self.metrics.resets,
            longest = self.metrics.longest,
            elapsed = %self.metrics.format_time(),
            "play session ended"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let frame_interval =
            Duration::from_secs_f64(1.0 / f64::from(self.engine.config().frame_rate));
        let mut frame_timer = interval(frame_interval);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // One display frame
                _ = frame_timer.tick() => {
                    if self.on_frame() {
                        self.draw(terminal)?;
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    self.engine.steer(direction);
                }
                KeyAction::Quit => {
                    debug!("quit requested");
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    /// Feed one frame to the scheduler; true when the canvas was repainted
    fn on_frame(&mut self) -> bool {
        match self.scheduler.on_frame(&mut self.engine, &mut self.canvas) {
            Some(resolution) => {
                self.metrics
                    .on_tick(resolution, self.engine.state().snake.len());
                true
            }
            None => false,
        }
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        self.metrics.update();
        terminal
            .draw(|frame| {
                self.renderer.render(frame, &self.canvas, &self.metrics);
            })
            .context("Failed to draw frame")?;
        Ok(())
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
