use std::fmt;
use std::io::{self, BufRead, Write};

use crate::game::GameParameters;
use crate::{MAX_GRID, MIN_GRID};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupError {
    NotANumber,
    OutOfRange,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NotANumber => write!(f, "Invalid input. Please enter a valid number."),
            SetupError::OutOfRange => write!(
                f,
                "Invalid value. Please enter a value between {MIN_GRID} and {MAX_GRID}."
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Rows,
    Columns,
    CurrentScore,
    HighScore,
    Level,
    BallPosition,
    PaddleX,
}

impl Step {
    fn prompt(self) -> &'static str {
        match self {
            Step::Rows => "Rows (1-10): ",
            Step::Columns => "Columns (1-10): ",
            Step::CurrentScore => "Current Score: ",
            Step::HighScore => "High Score: ",
            Step::Level => "Level: ",
            Step::BallPosition => "Ball Position (X Y): ",
            Step::PaddleX => "Paddle Position (X): ",
        }
    }
}

#[derive(Clone, Copy, Default)]
struct Draft {
    rows: i32,
    columns: i32,
    current_score: i32,
    high_score: i32,
    level: i32,
    ball: (f64, f64),
}

/// Result of feeding one input line to the setup flow.
#[derive(Debug, PartialEq)]
pub enum Feed {
    /// Accepted; ask for the next prompt.
    Next,
    /// Rejected; the whole sequence restarts from the first prompt.
    Restart(SetupError),
    /// All seven fields collected.
    Done(GameParameters),
    /// User cancelled.
    Aborted,
}

/// The parameter collection flow as an explicit state machine. Validation
/// failures restart the sequence from the first prompt with the draft
/// cleared (all-or-nothing); "q" at any prompt aborts.
pub struct Setup {
    step: Step,
    draft: Draft,
}

impl Setup {
    pub fn new() -> Self {
        Self { step: Step::Rows, draft: Draft::default() }
    }

    pub fn prompt(&self) -> &'static str {
        self.step.prompt()
    }

    pub fn feed(&mut self, line: &str) -> Feed {
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Feed::Aborted;
        }
        match self.accept(line) {
            Ok(feed) => feed,
            Err(err) => {
                self.step = Step::Rows;
                self.draft = Draft::default();
                Feed::Restart(err)
            }
        }
    }

    fn accept(&mut self, line: &str) -> Result<Feed, SetupError> {
        match self.step {
            Step::Rows => {
                self.draft.rows = parse_grid_count(line)?;
                self.step = Step::Columns;
            }
            Step::Columns => {
                self.draft.columns = parse_grid_count(line)?;
                self.step = Step::CurrentScore;
            }
            Step::CurrentScore => {
                self.draft.current_score = parse_int(line)?;
                self.step = Step::HighScore;
            }
            Step::HighScore => {
                // Below current score is not an error; the constructor raises it.
                self.draft.high_score = parse_int(line)?;
                self.step = Step::Level;
            }
            Step::Level => {
                self.draft.level = parse_int(line)?;
                self.step = Step::BallPosition;
            }
            Step::BallPosition => {
                self.draft.ball = parse_pair(line)?;
                self.step = Step::PaddleX;
            }
            Step::PaddleX => {
                let paddle_x = parse_float(line)?;
                let d = self.draft;
                return Ok(Feed::Done(GameParameters::new(
                    d.rows,
                    d.columns,
                    d.current_score,
                    d.high_score,
                    d.level,
                    d.ball,
                    paddle_x,
                )));
            }
        }
        Ok(Feed::Next)
    }
}

fn parse_int(s: &str) -> Result<i32, SetupError> {
    s.parse().map_err(|_| SetupError::NotANumber)
}

fn parse_float(s: &str) -> Result<f64, SetupError> {
    s.parse().map_err(|_| SetupError::NotANumber)
}

fn parse_grid_count(s: &str) -> Result<i32, SetupError> {
    let n = parse_int(s)?;
    if (MIN_GRID..=MAX_GRID).contains(&n) {
        Ok(n)
    } else {
        Err(SetupError::OutOfRange)
    }
}

fn parse_pair(s: &str) -> Result<(f64, f64), SetupError> {
    let mut parts = s.split_whitespace();
    let x = parse_float(parts.next().ok_or(SetupError::NotANumber)?)?;
    let y = parse_float(parts.next().ok_or(SetupError::NotANumber)?)?;
    Ok((x, y))
}

/// Runs the flow against a line source and sink. Returns `None` when the
/// user cancels ("q") or the input ends.
pub fn collect_parameters<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
) -> io::Result<Option<GameParameters>> {
    let mut setup = Setup::new();
    let mut line = String::new();
    loop {
        write!(out, "{}", setup.prompt())?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match setup.feed(&line) {
            Feed::Next => {}
            Feed::Restart(err) => writeln!(out, "{err}")?,
            Feed::Done(params) => return Ok(Some(params)),
            Feed::Aborted => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rstest::rstest;

    use super::*;

    fn run(lines: &[&str]) -> (Setup, Feed) {
        let mut setup = Setup::new();
        let mut last = Feed::Next;
        for line in lines {
            last = setup.feed(line);
        }
        (setup, last)
    }

    #[test]
    fn happy_path_collects_all_seven_fields() {
        let (_, last) = run(&["3", "4", "100", "250", "2", "120.5 80.0", "360"]);
        match last {
            Feed::Done(p) => {
                assert_eq!(p.rows, 3);
                assert_eq!(p.columns, 4);
                assert_eq!(p.current_score, 100);
                assert_eq!(p.high_score, 250);
                assert_eq!(p.level, 2);
                assert_eq!((p.ball_x, p.ball_y), (120.5, 80.0));
                assert_eq!(p.paddle_x, 360.0);
            }
            other => panic!("expected Done, got {other:?}"),
        }
    }

    #[test]
    fn low_high_score_is_raised_not_rejected() {
        let (_, last) = run(&["3", "4", "100", "50", "1", "0 0", "0"]);
        match last {
            Feed::Done(p) => assert_eq!(p.high_score, 100),
            other => panic!("expected Done, got {other:?}"),
        }
    }

    #[rstest]
    #[case("0")]
    #[case("11")]
    #[case("-3")]
    fn grid_count_out_of_range_restarts(#[case] bad: &str) {
        let mut setup = Setup::new();
        assert_eq!(setup.feed(bad), Feed::Restart(SetupError::OutOfRange));
        assert_eq!(setup.prompt(), "Rows (1-10): ");
    }

    #[test]
    fn error_mid_sequence_restarts_from_first_prompt() {
        let (setup, last) = run(&["3", "4", "abc"]);
        assert_eq!(last, Feed::Restart(SetupError::NotANumber));
        assert_eq!(setup.prompt(), "Rows (1-10): ");
    }

    #[test]
    fn restart_clears_the_draft() {
        // First pass dies at level; second pass must not inherit rows=9.
        let (_, last) = run(&["9", "9", "0", "0", "x", "2", "2", "5", "5", "1", "1 1", "1"]);
        match last {
            Feed::Done(p) => {
                assert_eq!(p.rows, 2);
                assert_eq!(p.columns, 2);
            }
            other => panic!("expected Done, got {other:?}"),
        }
    }

    #[test]
    fn ball_position_needs_both_components() {
        let (_, last) = run(&["3", "4", "0", "0", "1", "42"]);
        assert_eq!(last, Feed::Restart(SetupError::NotANumber));
    }

    #[test]
    fn quit_aborts_at_any_prompt() {
        let (_, last) = run(&["3", "4", "q"]);
        assert_eq!(last, Feed::Aborted);
    }

    #[test]
    fn collect_reports_errors_and_finishes() {
        let input = Cursor::new("12\n3\n4\n0\n0\n1\n5 5\n7\n");
        let mut out = Vec::new();
        let params = collect_parameters(input, &mut out).unwrap().unwrap();
        assert_eq!(params.rows, 3);
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("between 1 and 10"));
        assert!(transcript.contains("Paddle Position"));
    }

    #[test]
    fn collect_returns_none_on_eof() {
        let input = Cursor::new("3\n4\n");
        let mut out = Vec::new();
        assert_eq!(collect_parameters(input, &mut out).unwrap(), None);
    }
}
