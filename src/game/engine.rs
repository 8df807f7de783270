use tracing::{debug, info, trace};

use super::{
    config::GameConfig,
    direction::Direction,
    picker::CellPicker,
    state::{Resolution, SimulationState},
};

/// Owns the simulation state and the target picker
pub struct GameEngine {
    config: GameConfig,
    state: SimulationState,
    picker: CellPicker,
    ticks: u64,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let mut picker = match config.seed {
            Some(seed) => CellPicker::seeded(config.cols, config.rows, config.cell_size, seed),
            None => CellPicker::new(config.cols, config.rows, config.cell_size),
        };
        let target = config
            .initial_target
            .unwrap_or_else(|| picker.pick_cell());
        let state = SimulationState::new(&config, target);

        Self {
            config,
            state,
            picker,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    /// Ticks run since the engine was created
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Forward a direction request to the controller
    pub fn steer(&mut self, direction: Direction) -> bool {
        let accepted = self.state.controller.request(direction);
        trace!(?direction, accepted, "direction request");
        accepted
    }

    /// Execute one tick: advance, then resolve growth and self-collision
    pub fn tick(&mut self) -> Resolution {
        self.state.advance();
        let resolution = self.state.resolve(&mut self.picker);
        self.ticks += 1;

        if resolution.reset {
            info!(
                tick = self.ticks,
                target_x = self.state.target.x,
                target_y = self.state.target.y,
                "snake hit itself, state reset"
            );
        } else if resolution.grew {
            debug!(
                tick = self.ticks,
                target_length = self.state.snake.target_length(),
                target_x = self.state.target.x,
                target_y = self.state.target.y,
                "target eaten"
            );
        }
        trace!(
            tick = self.ticks,
            head_x = self.state.snake.head().x,
            head_y = self.state.snake.head().y,
            length = self.state.snake.len(),
            "tick"
        );

        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GridCell, Snake};

    #[test]
    fn test_launch_state() {
        let engine = GameEngine::new(GameConfig::default());
        let state = engine.state();

        assert!(state.snake.is_empty());
        assert_eq!(state.snake.head(), GridCell::new(160, 160));
        assert_eq!(state.snake.target_length(), 4);
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.target, GridCell::new(320, 320));
    }

    #[test]
    fn test_random_initial_target() {
        let config = GameConfig {
            initial_target: None,
            seed: Some(3),
            ..Default::default()
        };
        let a = GameEngine::new(config.clone());
        let b = GameEngine::new(config);

        assert_eq!(a.state().target, b.state().target);
        assert_eq!(a.state().target.x % 20, 0);
    }

    #[test]
    fn test_tick_moves_and_counts() {
        let mut engine = GameEngine::new(GameConfig::default());

        let resolution = engine.tick();

        assert_eq!(resolution, Resolution::default());
        assert_eq!(engine.ticks(), 1);
        assert_eq!(engine.state().snake.head(), GridCell::new(180, 160));
    }

    #[test]
    fn test_steer_applies_on_next_tick() {
        let mut engine = GameEngine::new(GameConfig::default());

        assert!(!engine.steer(Direction::Left));
        assert!(engine.steer(Direction::Down));
        engine.tick();

        assert_eq!(engine.state().snake.head(), GridCell::new(160, 180));
    }

    #[test]
    fn test_target_eaten_and_relocated() {
        let mut engine = GameEngine::new(GameConfig {
            seed: Some(11),
            ..Default::default()
        });
        engine.state_mut().target = GridCell::new(200, 160);

        assert!(!engine.tick().grew);
        let resolution = engine.tick();

        assert!(resolution.grew);
        assert_eq!(engine.state().snake.target_length(), 5);

        // The launch target came from config, so this is the picker's first cell
        let expected = CellPicker::seeded(20, 20, 20, 11).pick_cell();
        assert_eq!(engine.state().target, expected);
    }

    #[test]
    fn test_reset_relocates_target() {
        let mut engine = GameEngine::new(GameConfig {
            seed: Some(4),
            ..Default::default()
        });
        let start = engine.config().start;
        engine.state_mut().snake = Snake::from_cells(
            start,
            [
                GridCell::new(40, 20),
                GridCell::new(40, 40),
                GridCell::new(20, 40),
                GridCell::new(20, 20),
                GridCell::new(40, 20),
            ],
            6,
        );
        engine.steer(Direction::Up);

        assert!(engine.tick().reset);
        let expected = CellPicker::seeded(20, 20, 20, 4).pick_cell();
        assert_eq!(engine.state().target, expected);
    }

    #[test]
    fn test_length_tracks_ticks_until_target_length() {
        let mut engine = GameEngine::new(GameConfig {
            initial_target: Some(GridCell::new(0, 380)),
            ..Default::default()
        });

        for tick in 1..=10 {
            engine.tick();
            let snake = &engine.state().snake;
            assert_eq!(snake.len(), tick.min(snake.target_length()));
        }
    }
}
