//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus, autoplay pacing
//! - **[`panes`]** — stateless render functions for each visible pane (code, console,
//!   stack, queues, description, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Stepper`] over a
//! concept catalog and call [`App::run`] to start the event loop.
//!
//! [`Stepper`]: crate::stepper::Stepper
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
