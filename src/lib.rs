//! # Introduction
//!
//! jstty is a step-through visualizer for JavaScript runtime concepts. Each
//! concept ships a hand-authored catalog of walkthroughs — static snapshots
//! of a hypothetical program's state — navigated forward and backward
//! through a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Catalog (static content) → Stepper (navigation state) → TUI
//! ```
//!
//! 1. [`catalog`] — the bundled concepts: step data for the event loop,
//!    promises, closures, prototypes, hoisting and recursion, validated at
//!    startup.
//! 2. [`stepper`] — the generic navigation core: bounds-checked
//!    level/example/step indices with clamped moves and an autoplay timer.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! There is no interpreter anywhere in here: every "program state" on
//! screen is authored data, which is what keeps each walkthrough exactly as
//! instructive as it was written to be.

pub mod catalog;
pub mod stepper;
pub mod ui;
