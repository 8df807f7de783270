use wrapsnake::game::{
    Direction, FrameScheduler, GameConfig, GameEngine, GridCell, Pacing, Snake,
};
use wrapsnake::render::{CellCanvas, CellColor, RenderSurface};

#[derive(Default)]
struct RecordingSurface {
    clears: usize,
    drawn: Vec<(GridCell, i32, CellColor)>,
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self, _width: i32, _height: i32) {
        self.clears += 1;
        self.drawn.clear();
    }

    fn draw_filled_cell(&mut self, cell: GridCell, size: i32, color: CellColor) {
        self.drawn.push((cell, size, color));
    }
}

fn quiet_config() -> GameConfig {
    // Target parked in a row the snake never visits
    GameConfig {
        initial_target: Some(GridCell::new(0, 380)),
        seed: Some(5),
        ..Default::default()
    }
}

fn body(engine: &GameEngine) -> Vec<GridCell> {
    engine.state().snake.body().iter().copied().collect()
}

#[test]
fn test_opening_scenario_through_scheduler() {
    let mut engine = GameEngine::new(quiet_config());
    let mut scheduler = FrameScheduler::new(Pacing::from_config(engine.config()));
    let mut surface = RecordingSurface::default();

    for _ in 0..4 {
        scheduler.on_frame(&mut engine, &mut surface);
    }
    assert_eq!(body(&engine), vec![GridCell::new(180, 160)]);

    for _ in 0..12 {
        scheduler.on_frame(&mut engine, &mut surface);
    }
    assert_eq!(
        body(&engine),
        vec![
            GridCell::new(240, 160),
            GridCell::new(220, 160),
            GridCell::new(200, 160),
            GridCell::new(180, 160),
        ]
    );

    for _ in 0..4 {
        scheduler.on_frame(&mut engine, &mut surface);
    }
    assert_eq!(engine.state().snake.len(), 4);
    assert_eq!(engine.state().snake.head(), GridCell::new(260, 160));

    // Last repaint: target then four segments, all one unit short of a cell
    assert_eq!(surface.clears, 5);
    assert_eq!(surface.drawn.len(), 5);
    assert_eq!(
        surface.drawn[0],
        (GridCell::new(0, 380), 19, CellColor::Target)
    );
    assert!(surface.drawn[1..]
        .iter()
        .all(|&(_, size, color)| size == 19 && color == CellColor::Actor));
}

#[test]
fn test_full_lap_wraps_back_to_start() {
    let mut engine = GameEngine::new(quiet_config());

    for _ in 0..20 {
        engine.tick();
    }

    assert_eq!(engine.state().snake.head(), GridCell::new(160, 160));
    assert_eq!(engine.ticks(), 20);
}

#[test]
fn test_growth_then_reset_cycle() {
    let mut engine = GameEngine::new(quiet_config());
    engine.state_mut().target = GridCell::new(200, 160);

    engine.tick();
    assert!(engine.tick().grew);
    assert_eq!(engine.state().snake.target_length(), 5);

    // Force an overlapping body and let the next tick catch it
    let start = engine.config().start;
    engine.state_mut().snake = Snake::from_cells(
        start,
        [
            GridCell::new(60, 40),
            GridCell::new(60, 60),
            GridCell::new(40, 60),
            GridCell::new(40, 40),
            GridCell::new(60, 40),
        ],
        6,
    );
    engine.state_mut().target = GridCell::new(0, 380);
    engine.steer(Direction::Up);
    let resolution = engine.tick();

    assert!(resolution.reset);
    let state = engine.state();
    assert!(state.snake.is_empty());
    assert_eq!(state.snake.target_length(), 4);
    assert_eq!(state.direction(), Direction::Right);
    assert_eq!(state.snake.head(), GridCell::new(160, 160));
}

#[test]
fn test_canvas_reflects_last_tick() {
    let mut engine = GameEngine::new(quiet_config());
    let mut scheduler = FrameScheduler::new(Pacing::FrameCount { every: 1 });
    let mut canvas = CellCanvas::new(20);

    scheduler.on_frame(&mut engine, &mut canvas);
    scheduler.on_frame(&mut engine, &mut canvas);

    assert_eq!(canvas.get(9, 8), Some(CellColor::Actor));
    assert_eq!(canvas.get(10, 8), Some(CellColor::Actor));
    assert_eq!(canvas.get(8, 8), None);
    assert_eq!(canvas.get(0, 19), Some(CellColor::Target));
}
