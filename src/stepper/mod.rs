//! Generic step-sequence navigation.
//!
//! Every visualizer in the app walks the same content shape: a [`Catalog`] of
//! difficulty [`Level`]s, each holding a list of [`Example`]s, each holding a
//! non-empty list of steps. The [`Stepper`] owns the only mutable state
//! (current level, example index, step index, autoplay flag) and keeps every
//! transition inside the catalog's bounds, so render code can index the
//! active step without checking anything.

use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Difficulty tier grouping examples within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A named ordered walkthrough: static source listing plus the scripted
/// steps that narrate it, generic over the step payload.
#[derive(Debug, Clone)]
pub struct Example<S> {
    pub title: &'static str,
    pub code: &'static [&'static str],
    pub steps: Vec<S>,
    pub insight: &'static str,
}

/// Content validation errors, reported when a catalog is built.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog declares no levels")]
    NoLevels,
    #[error("level {0} declares no examples")]
    EmptyLevel(Level),
    #[error("example \"{title}\" ({level}) has no steps")]
    EmptyExample { level: Level, title: &'static str },
    #[error("level {0} declared twice")]
    DuplicateLevel(Level),
}

/// The static `Level -> Example -> Step` content tree.
///
/// Built once at startup from authored data and never mutated. Construction
/// checks the invariants the navigation code relies on: at least one level,
/// no level without examples, no example without steps.
#[derive(Debug, Clone)]
pub struct Catalog<S> {
    levels: Vec<Level>,
    examples: FxHashMap<Level, Vec<Example<S>>>,
}

impl<S> Catalog<S> {
    pub fn new(groups: Vec<(Level, Vec<Example<S>>)>) -> Result<Self, CatalogError> {
        if groups.is_empty() {
            return Err(CatalogError::NoLevels);
        }

        let mut levels = Vec::with_capacity(groups.len());
        let mut examples = FxHashMap::default();

        for (level, list) in groups {
            if list.is_empty() {
                return Err(CatalogError::EmptyLevel(level));
            }
            for example in &list {
                if example.steps.is_empty() {
                    return Err(CatalogError::EmptyExample {
                        level,
                        title: example.title,
                    });
                }
            }
            if examples.insert(level, list).is_some() {
                return Err(CatalogError::DuplicateLevel(level));
            }
            levels.push(level);
        }

        Ok(Catalog { levels, examples })
    }

    /// Declared levels, in authored order.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn first_level(&self) -> Level {
        self.levels[0]
    }

    pub fn has_level(&self, level: Level) -> bool {
        self.examples.contains_key(&level)
    }

    /// Examples of a declared level. Panics on an undeclared level; the
    /// stepper only ever passes declared ones.
    pub fn examples(&self, level: Level) -> &[Example<S>] {
        &self.examples[&level]
    }

    pub fn example(&self, level: Level, example: usize) -> &Example<S> {
        &self.examples(level)[example]
    }

    /// The step selector: pure positional lookup. Indices outside the
    /// validated tree are a caller bug and panic.
    pub fn step(&self, level: Level, example: usize, step: usize) -> &S {
        &self.example(level, example).steps[step]
    }
}

/// Bounds-checked navigation state over a [`Catalog`].
///
/// The indices always satisfy `example_index < examples(level).len()` and
/// `step_index < current_example().steps.len()`: every operation either
/// moves within bounds or resets the finer-grained indices to zero.
#[derive(Debug)]
pub struct Stepper<S> {
    catalog: Catalog<S>,
    level: Level,
    example_index: usize,
    step_index: usize,
    is_playing: bool,
}

impl<S> Stepper<S> {
    /// Start at the first declared level, first example, first step.
    pub fn new(catalog: Catalog<S>) -> Self {
        let level = catalog.first_level();
        Stepper {
            catalog,
            level,
            example_index: 0,
            step_index: 0,
            is_playing: false,
        }
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn example_index(&self) -> usize {
        self.example_index
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_example(&self) -> &Example<S> {
        self.catalog.example(self.level, self.example_index)
    }

    pub fn current_step(&self) -> &S {
        self.catalog.step(self.level, self.example_index, self.step_index)
    }

    pub fn step_count(&self) -> usize {
        self.current_example().steps.len()
    }

    pub fn can_next(&self) -> bool {
        self.step_index + 1 < self.step_count()
    }

    pub fn can_prev(&self) -> bool {
        self.step_index > 0
    }

    /// Advance one step. No-op at the last step; returns whether it moved.
    pub fn next(&mut self) -> bool {
        if self.can_next() {
            self.step_index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step. No-op at step zero; returns whether it moved.
    pub fn prev(&mut self) -> bool {
        if self.can_prev() {
            self.step_index -= 1;
            true
        } else {
            false
        }
    }

    /// Back to the first step of the active example.
    pub fn reset(&mut self) {
        self.step_index = 0;
    }

    /// Jump to the last step of the active example.
    pub fn jump_to_end(&mut self) {
        self.step_index = self.step_count() - 1;
    }

    /// Switch level, resetting example and step to zero and stopping
    /// playback. Returns false (state untouched) for an undeclared level.
    pub fn change_level(&mut self, level: Level) -> bool {
        if !self.catalog.has_level(level) {
            return false;
        }
        self.level = level;
        self.example_index = 0;
        self.step_index = 0;
        self.is_playing = false;
        true
    }

    /// Cycle to the next declared level.
    pub fn cycle_level(&mut self) {
        let levels = self.catalog.levels();
        let pos = levels.iter().position(|&l| l == self.level).unwrap_or(0);
        let next = levels[(pos + 1) % levels.len()];
        self.change_level(next);
    }

    /// Switch example within the current level, resetting the step to zero
    /// and stopping playback. Returns false for an out-of-range index.
    pub fn change_example(&mut self, index: usize) -> bool {
        if index >= self.catalog.examples(self.level).len() {
            return false;
        }
        self.example_index = index;
        self.step_index = 0;
        self.is_playing = false;
        true
    }

    /// Cycle to the next example of the current level, wrapping around.
    pub fn cycle_example(&mut self) {
        let count = self.catalog.examples(self.level).len();
        let next = (self.example_index + 1) % count;
        self.change_example(next);
    }

    pub fn toggle_autoplay(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn stop_autoplay(&mut self) {
        self.is_playing = false;
    }

    /// One autoplay tick: advance a step while playing. The tick that lands
    /// on the last step stops playback, as does a tick issued while already
    /// there, so playback never fires no-op advances. Returns whether the
    /// step index moved.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing {
            return false;
        }
        let moved = self.next();
        if !self.can_next() {
            self.is_playing = false;
        }
        moved
    }
}

/// Repeating schedule for autoplay with an explicit re-arm point.
///
/// The event loop polls `due()` only while the stepper is playing, so
/// stopping playback (or tearing the UI down) cancels any pending advance.
#[derive(Debug)]
pub struct AutoPlayTimer {
    interval: Duration,
    last_fire: Instant,
}

impl AutoPlayTimer {
    pub fn new(interval: Duration) -> Self {
        AutoPlayTimer {
            interval,
            last_fire: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Restart the interval from `now`, delaying the next fire by one full
    /// period. Called when playback is toggled on.
    pub fn arm(&mut self, now: Instant) {
        self.last_fire = now;
    }

    /// True once per elapsed interval; re-arms itself when it fires.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_fire) >= self.interval {
            self.last_fire = now;
            true
        } else {
            false
        }
    }
}
