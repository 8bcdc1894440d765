//! Main TUI application state and logic

use crate::catalog::ConceptStep;
use crate::stepper::{AutoPlayTimer, Stepper};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
    backend::Backend,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Code,
    Console,
    Stack,
    Queues,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: code -> console -> stack -> queues)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Code => FocusedPane::Console,
            FocusedPane::Console => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Queues,
            FocusedPane::Queues => FocusedPane::Code,
        }
    }
}

/// The main application state
pub struct App {
    /// Navigation over the concept's catalog
    pub stepper: Stepper<ConceptStep>,

    /// Concept title shown in the code pane border
    pub title: &'static str,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub code_scroll: usize,
    pub stack_scroll: usize,
    pub queues_scroll: usize,
    pub console_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Autoplay pacing
    timer: AutoPlayTimer,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app over the given stepper
    pub fn new(stepper: Stepper<ConceptStep>, title: &'static str, interval: Duration) -> Self {
        App {
            stepper,
            title,
            focused_pane: FocusedPane::Code,
            code_scroll: 0,
            stack_scroll: 0,
            queues_scroll: 0,
            console_scroll: 0,
            should_quit: false,
            timer: AutoPlayTimer::new(interval),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Autoplay: the timer is only consulted while playing, so
            // stopping playback cancels any pending advance.
            if self.stepper.is_playing() && self.timer.due(Instant::now()) {
                self.stepper.tick();
                self.console_scroll = usize::MAX;
            }

            // Use poll with timeout to allow autoplay to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes above, one-row status bar below
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Code (top) | Console (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Step description | Stack | Queues
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Percentage(40),
                Constraint::Min(0),
            ])
            .split(columns[1]);

        let example = self.stepper.current_example();
        let step = self.stepper.current_step().clone();
        let code = example.code;
        let insight = if self.stepper.can_next() {
            None
        } else {
            Some(example.insight)
        };

        super::panes::render_code_pane(
            frame,
            left_rows[0],
            self.title,
            code,
            step.highlight_lines,
            self.focused_pane == FocusedPane::Code,
            &mut self.code_scroll,
        );

        super::panes::render_output_pane(
            frame,
            left_rows[1],
            step.output,
            self.focused_pane == FocusedPane::Console,
            &mut self.console_scroll,
        );

        super::panes::render_description_pane(
            frame,
            right_rows[0],
            step.phase,
            step.description,
            insight,
        );

        super::panes::render_stack_pane(
            frame,
            right_rows[1],
            step.call_stack,
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );

        super::panes::render_queues_pane(
            frame,
            right_rows[2],
            step.queues,
            self.focused_pane == FocusedPane::Queues,
            &mut self.queues_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            self.stepper.level(),
            self.stepper.current_example().title,
            self.stepper.example_index(),
            self.stepper.catalog().examples(self.stepper.level()).len(),
            self.stepper.step_index(),
            self.stepper.step_count(),
            self.stepper.is_playing(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.stepper.stop_autoplay();
                self.stepper.prev();
            }
            KeyCode::Right => {
                self.stepper.stop_autoplay();
                self.stepper.next();
            }
            KeyCode::Char(' ') => {
                // Toggle autoplay (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.stepper.toggle_autoplay();
                    if self.stepper.is_playing() {
                        self.timer.arm(Instant::now());
                    }
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.stepper.stop_autoplay();
                self.stepper.reset();
            }
            KeyCode::Enter => {
                self.stepper.stop_autoplay();
                self.stepper.jump_to_end();
            }
            KeyCode::Backspace => {
                self.stepper.stop_autoplay();
                self.stepper.reset();
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.stepper.cycle_example();
                self.reset_scroll();
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                self.stepper.cycle_level();
                self.reset_scroll();
            }
            // Number keys select an example directly
            KeyCode::Char(c @ '1'..='9') => {
                let index = c.to_digit(10).unwrap() as usize - 1;
                if self.stepper.change_example(index) {
                    self.reset_scroll();
                }
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => self.scroll_focused(-1),
            KeyCode::Down => self.scroll_focused(1),
            _ => {}
        }
    }

    fn scroll_focused(&mut self, delta: isize) {
        let offset = match self.focused_pane {
            FocusedPane::Code => &mut self.code_scroll,
            FocusedPane::Console => &mut self.console_scroll,
            FocusedPane::Stack => &mut self.stack_scroll,
            FocusedPane::Queues => &mut self.queues_scroll,
        };
        if delta < 0 {
            *offset = offset.saturating_sub(delta.unsigned_abs());
        } else {
            *offset = offset.saturating_add(delta as usize);
        }
    }

    fn reset_scroll(&mut self) {
        self.code_scroll = 0;
        self.stack_scroll = 0;
        self.queues_scroll = 0;
        self.console_scroll = 0;
    }
}
