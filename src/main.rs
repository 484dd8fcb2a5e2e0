use std::error::Error;

mod app;
mod config;
mod game;
mod setup;
mod ui;

pub use config::{
    BALL_RADIUS, BRICK_PADDING, CANVAS_COLS, CANVAS_ROWS, GAME_REGION_RATIO, MAX_GRID,
    MIN_GRID, MIN_PANE_HEIGHT, MIN_PANE_WIDTH, PADDLE_H, PADDLE_W, SCORE_BAND_RATIO,
    SCORE_PAD_RATIO, SCREEN_PADDING, WINDOW_H, WINDOW_W,
};

fn main() -> Result<(), Box<dyn Error>> {
    app::run()
}
