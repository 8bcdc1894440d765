//! Bundled walkthrough content.
//!
//! Each concept module holds a hand-authored catalog of scripted steps:
//! static snapshots of a hypothetical program's state (call stack, task
//! queues, console output, highlighted source lines) that the UI renders
//! one at a time. The data is authored at build time and validated through
//! [`Catalog::new`] before the UI ever sees it.

use crate::stepper::{Catalog, CatalogError};

pub mod closures;
pub mod event_loop;
pub mod hoisting;
pub mod promises;
pub mod prototypes;
pub mod recursion;

/// A named queue snapshot (e.g. the microtask queue), front first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueState {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

/// Display payload for one instant of a walkthrough. Plain data, no
/// behavior; field meanings are shared by every concept so the panes can
/// render any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptStep {
    /// Short phase tag shown next to the step counter ("Sync", "Microtask").
    pub phase: &'static str,
    /// One or two sentences narrating what just happened.
    pub description: &'static str,
    /// 0-based lines of the example's code listing to highlight.
    pub highlight_lines: &'static [usize],
    /// Call stack, outermost frame first.
    pub call_stack: &'static [&'static str],
    /// Task queues and similar ordered collections, if the concept has any.
    pub queues: &'static [QueueState],
    /// Console output accumulated so far.
    pub output: &'static [&'static str],
}

impl ConceptStep {
    /// A step with every panel empty; content modules override the fields
    /// that matter for the instant they describe.
    pub const EMPTY: ConceptStep = ConceptStep {
        phase: "",
        description: "",
        highlight_lines: &[],
        call_stack: &[],
        queues: &[],
        output: &[],
    };
}

/// Registry entry for one bundled concept.
pub struct Concept {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub build: fn() -> Result<Catalog<ConceptStep>, CatalogError>,
}

/// All bundled concepts, in menu order.
pub const CONCEPTS: &[Concept] = &[
    Concept {
        slug: "event-loop",
        title: "Event Loop",
        summary: "Call stack, microtasks and macrotasks, tick by tick",
        build: event_loop::catalog,
    },
    Concept {
        slug: "promises",
        title: "Promises",
        summary: "Promise states, chaining and the combinators",
        build: promises::catalog,
    },
    Concept {
        slug: "closures",
        title: "Closures",
        summary: "Captured environments outliving their function calls",
        build: closures::catalog,
    },
    Concept {
        slug: "prototypes",
        title: "Prototype Chain",
        summary: "Property lookup walking the prototype links",
        build: prototypes::catalog,
    },
    Concept {
        slug: "hoisting",
        title: "Hoisting",
        summary: "Declarations moving to the top of their scope",
        build: hoisting::catalog,
    },
    Concept {
        slug: "recursion",
        title: "Recursion",
        summary: "Call stack growth and unwinding, frame by frame",
        build: recursion::catalog,
    },
];

/// Look up a concept by its CLI slug.
pub fn find(slug: &str) -> Option<&'static Concept> {
    CONCEPTS.iter().find(|c| c.slug == slug)
}
