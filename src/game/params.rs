/// Game parameters collected once at startup. Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct GameParameters {
    pub rows: i32,
    pub columns: i32,
    pub current_score: i32,
    pub high_score: i32,
    pub level: i32,
    pub ball_x: f64,
    pub ball_y: f64,
    pub paddle_x: f64,
}

impl GameParameters {
    /// A high score entered below the current score is silently raised to it.
    /// Ball and paddle positions are taken as-is; out-of-range values draw
    /// off-region rather than fail.
    pub fn new(
        rows: i32,
        columns: i32,
        current_score: i32,
        high_score: i32,
        level: i32,
        ball: (f64, f64),
        paddle_x: f64,
    ) -> Self {
        Self {
            rows,
            columns,
            current_score,
            high_score: high_score.max(current_score),
            level,
            ball_x: ball.0,
            ball_y: ball.1,
            paddle_x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_score_raised_to_current_score() {
        let p = GameParameters::new(3, 4, 100, 50, 1, (0.0, 0.0), 0.0);
        assert_eq!(p.high_score, 100);
        assert_eq!(p.current_score, 100);
    }

    #[test]
    fn high_score_kept_when_already_higher() {
        let p = GameParameters::new(3, 4, 100, 250, 1, (0.0, 0.0), 0.0);
        assert_eq!(p.high_score, 250);
    }

    #[test]
    fn negative_scores_still_ordered() {
        let p = GameParameters::new(1, 1, -5, -20, 0, (0.0, 0.0), 0.0);
        assert_eq!(p.high_score, -5);
    }
}
