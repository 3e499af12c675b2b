//! Snake Grid entry point
//!
//! Runs headless: an autopilot stands in for the keyboard and the board is
//! printed as text at the end of every game.

use snake_grid::render::{TextRenderer, render};
use snake_grid::sim::{Coord, EntityKind, Heading, Session};
use snake_grid::{FrameOutcome, Game, Settings};

/// Scheduler frames to run before exiting
const FRAMES: u32 = 5_000;

fn main() {
    env_logger::init();
    log::info!("Snake Grid (native) starting...");

    let settings = Settings::load();
    let mut game = match Game::new(&settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid settings: {}", e);
            std::process::exit(1);
        }
    };

    for _ in 0..FRAMES {
        if let Some(heading) = autopilot(game.session()) {
            game.handle_direction(heading);
        }
        let last_board = board_text(game.session());
        if let FrameOutcome::Restarted { final_score, reason } = game.frame() {
            println!("{last_board}game over: {reason} (score {final_score})\n");
        }
    }

    println!("{}", board_text(game.session()));
    println!(
        "games finished: {}, best score: {}",
        game.games_played(),
        game.best_score()
    );
}

fn board_text(session: &Session) -> String {
    let mut renderer = TextRenderer::new();
    match render(session, &mut renderer) {
        Ok(()) => renderer.output(),
        Err(e) => format!("render failed: {e}\n"),
    }
}

/// Greedy steering: head for the food along a safe cell, any safe cell otherwise
fn autopilot(session: &Session) -> Option<Heading> {
    let grid = session.grid();
    let snake = session.snake();
    let head = snake.head();
    let food = grid
        .occupants()
        .find(|e| e.kind == EntityKind::Food)
        .map(|e| e.pos);

    let safe = |pos: Coord| grid.contains(pos) && grid.get(pos).is_none_or(|e| e.kind == EntityKind::Food);
    let distance = |pos: Coord| food.map(|f| (f.x - pos.x).abs() + (f.y - pos.y).abs()).unwrap_or(0);

    [Heading::Left, Heading::Up, Heading::Right, Heading::Down]
        .into_iter()
        .filter(|h| snake.heading() != Some(h.reverse()))
        .filter(|h| safe(head.step(*h)))
        .min_by_key(|h| distance(head.step(*h)))
}
