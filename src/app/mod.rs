use std::error::Error;
use std::io::{self, stdout, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::game::{layout_frame, DrawCmd};
use crate::setup::collect_parameters;
use crate::ui::draw_screen;

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), Box<dyn Error>> {
    // Collect on the plain terminal before entering the alternate screen.
    let stdin = io::stdin();
    let params = match collect_parameters(stdin.lock(), stdout())? {
        Some(params) => params,
        None => return Ok(()),
    };

    // The screen is static: one layout pass, redrawn only on events.
    let cmds = layout_frame(&params);
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut(), &cmds)
}

fn run_loop(terminal: &mut Term, cmds: &[DrawCmd]) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|frame| draw_screen(frame, cmds))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
            }
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
