use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::game::{DrawCmd, Paint};
use crate::{CANVAS_COLS, CANVAS_ROWS, MIN_PANE_HEIGHT, MIN_PANE_WIDTH, WINDOW_H, WINDOW_W};

pub fn draw_screen(frame: &mut Frame, cmds: &[DrawCmd]) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH || area.height < MIN_PANE_HEIGHT {
        let msg = Paragraph::new(format!(
            "RESIZE PANE (min {}x{})",
            MIN_PANE_WIDTH, MIN_PANE_HEIGHT
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("ARKANOID"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("ARKANOID")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    // Center the fixed-size canvas within the cabinet.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(CANVAS_ROWS as u16),
            Constraint::Min(0),
        ])
        .split(cabinet_inner);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(CANVAS_COLS as u16),
            Constraint::Min(0),
        ])
        .split(v_center[1]);
    let canvas_rect = h_center[1];

    let mut canvas = CharCanvas::new();
    canvas.replay(cmds);
    frame.render_widget(
        Paragraph::new(canvas.to_lines()).alignment(Alignment::Left),
        canvas_rect,
    );
}

fn paint_color(paint: Paint) -> Color {
    match paint {
        Paint::Background => Color::Black,
        Paint::Panel => Color::DarkGray,
        Paint::BrickEven => Color::Blue,
        Paint::BrickOdd => Color::Yellow,
        Paint::Ball => Color::Red,
        Paint::Paddle => Color::Green,
    }
}

/// Character canvas over the 800x600 pixel space; each cell covers
/// `WINDOW_W / CANVAS_COLS` by `WINDOW_H / CANVAS_ROWS` pixels.
pub(crate) struct CharCanvas {
    cells: Vec<(char, Color)>,
}

impl CharCanvas {
    pub(crate) fn new() -> Self {
        Self { cells: vec![(' ', Color::Reset); CANVAS_COLS * CANVAS_ROWS] }
    }

    pub(crate) fn replay(&mut self, cmds: &[DrawCmd]) {
        for cmd in cmds {
            match cmd {
                DrawCmd::FillRect { x, y, w, h, paint } => {
                    self.fill_rect(*x, *y, *w, *h, paint_color(*paint));
                }
                DrawCmd::FillEllipse { x, y, w, h, paint } => {
                    self.fill_ellipse(*x, *y, *w, *h, paint_color(*paint));
                }
                DrawCmd::DrawText { x, y, text } => self.draw_text(*x, *y, text),
            }
        }
    }

    fn col_of(x: f64) -> isize {
        (x * CANVAS_COLS as f64 / WINDOW_W as f64).floor() as isize
    }

    fn row_of(y: f64) -> isize {
        (y * CANVAS_ROWS as f64 / WINDOW_H as f64).floor() as isize
    }

    fn plot(&mut self, col: isize, row: isize, ch: char, color: Color) {
        if col >= 0 && row >= 0 && (col as usize) < CANVAS_COLS && (row as usize) < CANVAS_ROWS {
            self.cells[row as usize * CANVAS_COLS + col as usize] = (ch, color);
        }
    }

    pub(crate) fn cell(&self, col: usize, row: usize) -> (char, Color) {
        self.cells[row * CANVAS_COLS + col]
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        // Degenerate rects (oversized grids) paint nothing.
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let c0 = Self::col_of(x);
        let r0 = Self::row_of(y);
        // At least one cell for any positive-size rect.
        let c1 = Self::col_of(x + w).max(c0 + 1);
        let r1 = Self::row_of(y + h).max(r0 + 1);
        for row in r0..r1 {
            for col in c0..c1 {
                self.plot(col, row, '█', color);
            }
        }
    }

    fn fill_ellipse(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let (cx, cy) = (x + w / 2.0, y + h / 2.0);
        let (rx, ry) = (w / 2.0, h / 2.0);
        let mut plotted = false;
        for row in Self::row_of(y)..=Self::row_of(y + h) {
            for col in Self::col_of(x)..=Self::col_of(x + w) {
                // Test the pixel at the cell's center.
                let px = (col as f64 + 0.5) * WINDOW_W as f64 / CANVAS_COLS as f64;
                let py = (row as f64 + 0.5) * WINDOW_H as f64 / CANVAS_ROWS as f64;
                let dx = (px - cx) / rx;
                let dy = (py - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.plot(col, row, '●', color);
                    plotted = true;
                }
            }
        }
        if !plotted {
            // Smaller than a cell; still mark its center.
            self.plot(Self::col_of(cx), Self::row_of(cy), '●', color);
        }
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str) {
        let row = Self::row_of(y);
        let col = Self::col_of(x);
        for (i, ch) in text.chars().enumerate() {
            self.plot(col + i as isize, row, ch, Color::White);
        }
    }

    fn to_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(CANVAS_ROWS);
        for row in 0..CANVAS_ROWS {
            let mut spans: Vec<Span> = Vec::new();
            let mut run = String::new();
            let mut run_color = self.cell(0, row).1;
            for col in 0..CANVAS_COLS {
                let (ch, color) = self.cell(col, row);
                if color != run_color && !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), Style::default().fg(run_color)));
                }
                run_color = color;
                run.push(ch);
            }
            if !run.is_empty() {
                spans.push(Span::styled(run, Style::default().fg(run_color)));
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use crate::game::{layout_frame, GameParameters};

    use super::*;

    fn canvas_for(params: &GameParameters) -> CharCanvas {
        let mut canvas = CharCanvas::new();
        canvas.replay(&layout_frame(params));
        canvas
    }

    #[test]
    fn background_and_panel_cover_the_canvas() {
        let canvas = canvas_for(&GameParameters::new(1, 1, 0, 0, 1, (0.0, 0.0), 0.0));
        // Left edge belongs to the game region, right edge to the panel.
        assert_eq!(canvas.cell(0, CANVAS_ROWS - 1).1, Color::Black);
        assert_eq!(canvas.cell(CANVAS_COLS - 1, 0).1, Color::DarkGray);
    }

    #[test]
    fn score_text_lands_in_the_panel() {
        let canvas = canvas_for(&GameParameters::new(1, 1, 42, 99, 3, (0.0, 0.0), 0.0));
        // "Current Score: 42" starts at px 650 -> col 81, py 150 -> row 7.
        let row: String = (81..CANVAS_COLS).map(|c| canvas.cell(c, 7).0).collect();
        assert!(row.starts_with("Current Score: 42"), "row was {row:?}");
    }

    #[test]
    fn top_brick_row_paints_blue() {
        let canvas = canvas_for(&GameParameters::new(2, 2, 0, 0, 1, (0.0, 0.0), 0.0));
        // Bricks start at (10, 20) px -> cell (1, 1).
        let (ch, color) = canvas.cell(1, 1);
        assert_eq!(ch, '█');
        assert_eq!(color, Color::Blue);
    }

    #[test]
    fn ball_marker_survives_cell_rounding() {
        // A 10px ball is smaller than one 8x20 px cell.
        let canvas = canvas_for(&GameParameters::new(1, 1, 0, 0, 1, (300.0, 400.0), 0.0));
        let col = (315.0 * CANVAS_COLS as f64 / WINDOW_W as f64) as usize;
        let row = (415.0 * CANVAS_ROWS as f64 / WINDOW_H as f64) as usize;
        assert_eq!(canvas.cell(col, row), ('●', Color::Red));
    }

    #[test]
    fn off_window_shapes_are_clipped_not_fatal() {
        let params = GameParameters::new(1, 1, 0, 0, 1, (-900.0, -900.0), 5000.0);
        let canvas = canvas_for(&params);
        // Paddle at x=5000 is entirely beyond the canvas.
        let bottom: Vec<Color> = (0..CANVAS_COLS)
            .map(|c| canvas.cell(c, CANVAS_ROWS - 1).1)
            .collect();
        assert!(!bottom.contains(&Color::Green));
    }

    #[test]
    fn paddle_paints_green_at_the_bottom() {
        let canvas = canvas_for(&GameParameters::new(1, 1, 0, 0, 1, (0.0, 0.0), 300.0));
        // Paddle rect (300, 575, 80, 15) -> cols 37..47, row 28.
        assert_eq!(canvas.cell(40, 28), ('█', Color::Green));
    }
}
