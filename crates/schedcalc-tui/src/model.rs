//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use schedcalc_core::{CalculatorEngine, EngineOptions, Key, Snapshot};

use crate::display::{render_display, DISPLAY_HEIGHT};
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::keypad::{hit_test, render_keypad};
use crate::messages::TuiMessage;
use crate::toast::{render_toast, Toast};

/// Interval between ticks of the event loop.
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Number of ticks a toast stays visible (3s at the 250ms tick rate).
pub const DEFAULT_TOAST_TICKS: u32 = 12;

/// Maximum width of the calculator card.
const CARD_WIDTH: u16 = 48;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// The calculator driven by this view.
    engine: CalculatorEngine,
    /// Advisory currently shown, if any.
    pub toast: Option<Toast>,
    /// Lifetime of new toasts, in ticks.
    pub toast_ticks: u32,
    /// Most recently pressed key, highlighted on the keypad.
    pub last_key: Option<Key>,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
}

impl TuiApp {
    /// Create a new TUI app around a fresh engine.
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        Self {
            should_quit: false,
            engine: CalculatorEngine::with_options(options),
            toast: None,
            toast_ticks: DEFAULT_TOAST_TICKS,
            last_key: None,
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// Set how many ticks new toasts stay visible.
    #[must_use]
    pub fn with_toast_ticks(mut self, ticks: u32) -> Self {
        self.toast_ticks = ticks.max(1);
        self
    }

    /// Number of ticks covering `duration`, at least one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn ticks_for(duration: Duration) -> u32 {
        let ticks = duration.as_millis() / TICK_RATE.as_millis();
        ticks.clamp(1, u128::from(u32::MAX)) as u32
    }

    /// The engine behind this view.
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Snapshot of the engine for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Handle a single message (Elm Update).
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
            TuiMessage::Click { column, row } => {
                let area = Rect::new(0, 0, self.terminal_width, self.terminal_height);
                let (_, _, keypad, _) = Self::compute_layout(area);
                if let Some(key) = hit_test(keypad, column, row) {
                    self.press(key);
                }
            }
            TuiMessage::Tick => {
                if let Some(toast) = self.toast.as_mut() {
                    if !toast.tick() {
                        self.toast = None;
                    }
                }
            }
            TuiMessage::Resize { width, height } => {
                tracing::debug!(width, height, "terminal resized");
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Quit => {
                tracing::debug!("quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(key) => self.press(key),
            KeyAction::Dismiss => self.toast = None,
            KeyAction::Quit => {
                tracing::debug!("quit requested");
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    /// Forward a key to the engine and surface any advisory as a toast.
    pub fn press(&mut self, key: Key) {
        self.last_key = Some(key);
        if let Some(advisory) = self.engine.press(key) {
            tracing::debug!(
                title = %advisory.title,
                ticks = self.toast_ticks,
                "advisory shown as toast"
            );
            self.toast = Some(Toast::new(advisory, self.toast_ticks));
        }
    }

    /// Center the calculator card horizontally.
    #[must_use]
    pub fn card_area(area: Rect) -> Rect {
        let width = CARD_WIDTH.min(area.width);
        Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
    }

    /// Compute the card layout.
    ///
    /// Returns (header, display, keypad, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let card = Self::card_area(area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),              // header
                Constraint::Length(DISPLAY_HEIGHT), // display
                Constraint::Min(5),                 // keypad
                Constraint::Length(2),              // footer
            ])
            .split(card);

        (chunks[0], chunks[1], chunks[2], chunks[3])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, display_area, keypad_area, footer_area) =
            Self::compute_layout(frame.area());

        render_header(frame, header_area, self.engine.options().utilization);
        render_display(frame, display_area, &self.snapshot());
        render_keypad(frame, keypad_area, self.last_key);
        render_footer(frame, footer_area);

        if let Some(toast) = &self.toast {
            render_toast(frame, Self::card_area(frame.area()), toast);
        }
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update, render),
    /// and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let size = terminal.size()?;
        self.handle_message(TuiMessage::Resize {
            width: size.width,
            height: size.height,
        });

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            // Poll for events with tick rate timeout
            if !event::poll(TICK_RATE)? {
                self.handle_message(TuiMessage::Tick);
                continue;
            }
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_message(TuiMessage::KeyPress(map_key(key_event)));
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    self.handle_message(TuiMessage::Click {
                        column: mouse.column,
                        row: mouse.row,
                    });
                }
                Event::Resize(width, height) => {
                    self.handle_message(TuiMessage::Resize { width, height });
                }
                _ => {}
            }
        }
    }
}
