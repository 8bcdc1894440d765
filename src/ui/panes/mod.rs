//! TUI pane rendering modules
//!
//! Stateless render functions for every visible pane, one module per pane:
//!
//! - [`code`]: the example's source listing with JS syntax highlighting and
//!   the current step's highlight set
//! - [`stack`]: call stack, top frame first
//! - [`queues`]: the step's named collections (task queues, promise boxes,
//!   environments, prototype chains)
//! - [`output`]: console output accumulated so far
//! - [`description`]: step narration and the closing insight
//! - [`status`]: status bar with position, level, example and keybindings
//!
//! Every pane takes its data from the active step; nothing here holds state
//! beyond the scroll offsets owned by the app.

pub mod code;
pub mod description;
pub mod output;
pub mod queues;
pub mod stack;
pub mod status;

pub use code::render_code_pane;
pub use description::render_description_pane;
pub use output::render_output_pane;
pub use queues::render_queues_pane;
pub use stack::render_stack_pane;
pub use status::render_status_bar;
