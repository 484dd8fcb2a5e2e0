use crate::game::GameParameters;
use crate::{
    BALL_RADIUS, BRICK_PADDING, GAME_REGION_RATIO, PADDLE_H, PADDLE_W, SCORE_BAND_RATIO,
    SCORE_PAD_RATIO, SCREEN_PADDING, WINDOW_H, WINDOW_W,
};

/// Semantic fill colors; the rendering backend maps them to real colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    Background,
    Panel,
    BrickEven,
    BrickOdd,
    Ball,
    Paddle,
}

/// One backend-agnostic drawing primitive in absolute pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    FillRect { x: f64, y: f64, w: f64, h: f64, paint: Paint },
    FillEllipse { x: f64, y: f64, w: f64, h: f64, paint: Paint },
    DrawText { x: f64, y: f64, text: String },
}

/// Lays out one frame as an ordered command list: background, score panel,
/// three labels, the brick grid row-major, ball, paddle. Pure function of
/// its input; total for any rows/columns >= 1 (oversized grids degenerate
/// into zero-or-negative-size rects instead of failing).
pub fn layout_frame(params: &GameParameters) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity((params.rows * params.columns + 6).max(6) as usize);

    cmds.push(DrawCmd::FillRect {
        x: 0.0,
        y: 0.0,
        w: WINDOW_W as f64,
        h: WINDOW_H as f64,
        paint: Paint::Background,
    });

    // 80/20 split: game region left, display panel right, both full height.
    let mut game_w = WINDOW_W as f64 * GAME_REGION_RATIO;
    let display_w = WINDOW_W as f64 * (1.0 - GAME_REGION_RATIO);
    let mut game_h = WINDOW_H as f64;
    let display_h = WINDOW_H as f64;

    cmds.push(DrawCmd::FillRect {
        x: game_w,
        y: 0.0,
        w: display_w,
        h: display_h,
        paint: Paint::Panel,
    });

    // Panel split into 5 equal bands; labels sit in bands 1..=3.
    let band_h = display_h * SCORE_BAND_RATIO;
    let band_pad = display_h * SCORE_PAD_RATIO;
    let label_x = game_w + SCREEN_PADDING as f64;
    cmds.push(DrawCmd::DrawText {
        x: label_x,
        y: band_pad + band_h,
        text: format!("Current Score: {}", params.current_score),
    });
    cmds.push(DrawCmd::DrawText {
        x: label_x,
        y: band_pad + band_h * 2.0,
        text: format!("High Score: {}", params.high_score),
    });
    cmds.push(DrawCmd::DrawText {
        x: label_x,
        y: band_pad + band_h * 3.0,
        text: format!("Level: {}", params.level),
    });

    // Reserve the score bands and side padding; what remains is the brick field.
    game_h -= band_h * 3.0 + band_pad * 4.0;
    game_w -= (SCREEN_PADDING * 2) as f64;

    let brick_start_y = SCREEN_PADDING * 2;
    let brick_w = (game_w / params.columns as f64) as i32 - BRICK_PADDING;
    // Field height loses one ball radius before the row split.
    let brick_h = ((game_h - BALL_RADIUS) / params.rows as f64) as i32 - BRICK_PADDING;

    for i in 0..params.rows {
        let brick_y = brick_start_y + i * (brick_h + BRICK_PADDING);
        let paint = if i % 2 == 0 { Paint::BrickEven } else { Paint::BrickOdd };
        for j in 0..params.columns {
            let brick_x = SCREEN_PADDING + j * (brick_w + BRICK_PADDING);
            cmds.push(DrawCmd::FillRect {
                x: brick_x as f64,
                y: brick_y as f64,
                w: brick_w as f64,
                h: brick_h as f64,
                paint,
            });
        }
    }

    // Ball bounding box uses the radius as its size, as the original did.
    cmds.push(DrawCmd::FillEllipse {
        x: SCREEN_PADDING as f64 + params.ball_x,
        y: SCREEN_PADDING as f64 + params.ball_y,
        w: BALL_RADIUS,
        h: BALL_RADIUS,
        paint: Paint::Ball,
    });

    cmds.push(DrawCmd::FillRect {
        x: params.paddle_x,
        y: (WINDOW_H - PADDLE_H - SCREEN_PADDING) as f64,
        w: PADDLE_W as f64,
        h: PADDLE_H as f64,
        paint: Paint::Paddle,
    });

    cmds
}
