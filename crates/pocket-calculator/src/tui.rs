//! Interactive terminal keypad
//!
//! Visual feedback: the two display lines, any notice, and the keypad
//! grid, redrawn after every key.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use tracing::debug;

use crate::cli::{CliError, CliResult};
use crate::core::{CalcError, CalculatorEngine, Command, DisplayFormat, DisplayLines};
use crate::input::{InputHandler, KeyAction, Keypad};

const HELP: &str = "Enter/= compute · Backspace delete · Esc clear · Ctrl+C quit";

/// Interactive calculator state: engine plus the notice being shown
#[derive(Debug, Default)]
pub struct CalculatorApp {
    engine: CalculatorEngine,
    keypad: Keypad,
    notice: Option<CalcError>,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates an app with default formatting
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app whose display uses `format`
    #[must_use]
    pub fn with_format(format: DisplayFormat) -> Self {
        Self {
            engine: CalculatorEngine::with_format(format),
            ..Self::default()
        }
    }

    /// Handles one decoded key action
    pub fn handle(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(command) => self.press(command),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Forwards a command; any reported condition replaces the notice
    pub fn press(&mut self, command: Command) {
        self.notice = self.engine.apply(command).err();
    }

    /// The current display lines
    #[must_use]
    pub fn display(&self) -> DisplayLines {
        self.engine.display()
    }

    /// The condition to surface, if the last key reported one
    #[must_use]
    pub fn notice(&self) -> Option<&CalcError> {
        self.notice.as_ref()
    }

    /// The engine behind the app
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Whether Ctrl+C / Ctrl+Q was pressed
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Screen content, top to bottom
    #[must_use]
    pub fn screen_lines(&self) -> Vec<String> {
        let display = self.display();
        let mut lines = vec![
            display.previous,
            display.current,
            self.notice.as_ref().map(|n| format!("! {n}")).unwrap_or_default(),
            String::new(),
        ];
        lines.extend(self.keypad.render_lines());
        lines.push(String::new());
        lines.push(HELP.to_string());
        lines
    }
}

/// Draws the app onto `out`
pub fn render<W: Write>(out: &mut W, app: &CalculatorApp) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for (row, line) in app.screen_lines().iter().enumerate() {
        queue!(out, MoveTo(0, row as u16), Print(line))?;
    }
    out.flush()
}

/// Runs the interactive keypad until the user quits
///
/// The terminal is restored on every exit path, including a failed setup.
pub fn run(format: DisplayFormat) -> CliResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    let result = execute!(stdout, EnterAlternateScreen, Hide)
        .map_err(CliError::from)
        .and_then(|()| event_loop(&mut stdout, CalculatorApp::with_format(format)));

    let restored = restore_terminal(&mut stdout);
    result.and(restored)
}

/// Leaves raw mode, then shows the cursor and leaves the alternate screen
fn restore_terminal<W: Write>(out: &mut W) -> CliResult<()> {
    let raw = disable_raw_mode();
    execute!(out, Show, LeaveAlternateScreen)?;
    raw?;
    Ok(())
}

fn event_loop<W: Write>(out: &mut W, mut app: CalculatorApp) -> CliResult<()> {
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        render(out, &app)?;
        if let Event::Key(key) = event::read()? {
            app.handle(input_handler.handle_key(key));
            if let Some(notice) = app.notice() {
                debug!(%notice, "notice shown");
            }
        }
    }
    Ok(())
}
