// Shared screen/layout constants.
pub const WINDOW_W: i32 = 800;
pub const WINDOW_H: i32 = 600;
pub const SCREEN_PADDING: i32 = 10;
pub const PADDLE_W: i32 = 80;
pub const PADDLE_H: i32 = 15;
pub const BALL_RADIUS: f64 = 10.0;
pub const GAME_REGION_RATIO: f64 = 0.8; // left share of the window; the rest is the score panel
pub const BRICK_PADDING: i32 = 5;
pub const SCORE_BAND_RATIO: f64 = 0.2; // panel height split into 5 equal bands
pub const SCORE_PAD_RATIO: f64 = 0.05;
pub const MIN_GRID: i32 = 1;
pub const MAX_GRID: i32 = 10;
// Terminal canvas: each cell covers 8x20 px of the 800x600 window.
pub const CANVAS_COLS: usize = 100;
pub const CANVAS_ROWS: usize = 30;
// Minimal pane size to fit the canvas plus the cabinet border.
pub const MIN_PANE_WIDTH: u16 = (CANVAS_COLS as u16) + 2;
pub const MIN_PANE_HEIGHT: u16 = (CANVAS_ROWS as u16) + 2;
