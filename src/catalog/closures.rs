//! Closure walkthroughs: captured environments outliving their calls.
//!
//! Captured variables are shown through the queues pane as named
//! environment records.

use crate::catalog::{ConceptStep, QueueState};
use crate::stepper::{Catalog, CatalogError, Example, Level};

pub fn catalog() -> Result<Catalog<ConceptStep>, CatalogError> {
    Catalog::new(vec![
        (Level::Beginner, vec![counter_factory()]),
        (Level::Intermediate, vec![loop_capture()]),
    ])
}

fn counter_factory() -> Example<ConceptStep> {
    const ENV: &str = "Captured Environment";
    Example {
        title: "Counter Factory",
        code: &[
            "function makeCounter() {",
            "  let count = 0;",
            "  return function () {",
            "    count += 1;",
            "    return count;",
            "  };",
            "}",
            "",
            "const counter = makeCounter();",
            "console.log(counter());",
            "console.log(counter());",
        ],
        steps: vec![
            ConceptStep {
                phase: "Call",
                description: "makeCounter() runs. A new scope is created with count = 0.",
                highlight_lines: &[0, 1, 8],
                call_stack: &["<script>", "makeCounter"],
                queues: &[QueueState { name: ENV, items: &["count: 0"] }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Capture",
                description: "The inner function is returned. makeCounter's frame pops, but the inner function keeps a reference to its scope.",
                highlight_lines: &[2, 3, 4, 5],
                call_stack: &["<script>"],
                queues: &[QueueState { name: ENV, items: &["count: 0 (kept alive by counter)"] }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Call",
                description: "counter() runs. It reads and writes the CAPTURED count, not a fresh one.",
                highlight_lines: &[3, 4, 9],
                call_stack: &["<script>", "counter"],
                queues: &[QueueState { name: ENV, items: &["count: 1"] }],
                output: &["1"],
            },
            ConceptStep {
                phase: "Call",
                description: "A second call sees the same environment: count is now 2.",
                highlight_lines: &[3, 4, 10],
                call_stack: &["<script>", "counter"],
                queues: &[QueueState { name: ENV, items: &["count: 2"] }],
                output: &["1", "2"],
            },
            ConceptStep {
                phase: "Done",
                description: "The scope lives as long as something references the closure. Private, persistent state with no class in sight.",
                call_stack: &["<script>"],
                queues: &[QueueState { name: ENV, items: &["count: 2"] }],
                output: &["1", "2"],
                ..ConceptStep::EMPTY
            },
        ],
        insight: "A closure is a function plus the environment it was created \
                  in. The environment outlives the call that created it for as \
                  long as the closure is reachable.",
    }
}

fn loop_capture() -> Example<ConceptStep> {
    const ENVS: &str = "Loop Environments";
    const MACRO: &str = "Macrotasks";
    Example {
        title: "var vs let in a Loop",
        code: &[
            "for (var i = 0; i < 3; i++) {",
            "  setTimeout(() => console.log('var', i), 0);",
            "}",
            "",
            "for (let j = 0; j < 3; j++) {",
            "  setTimeout(() => console.log('let', j), 0);",
            "}",
        ],
        steps: vec![
            ConceptStep {
                phase: "Sync",
                description: "The var loop queues three callbacks. All three capture the SAME i, which ends the loop at 3.",
                highlight_lines: &[0, 1, 2],
                call_stack: &["<script>"],
                queues: &[
                    QueueState { name: ENVS, items: &["i: 3 (shared)"] },
                    QueueState { name: MACRO, items: &["var cb", "var cb", "var cb"] },
                ],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Sync",
                description: "The let loop also queues three callbacks, but each iteration gets its OWN j binding.",
                highlight_lines: &[4, 5, 6],
                call_stack: &["<script>"],
                queues: &[
                    QueueState {
                        name: ENVS,
                        items: &["i: 3 (shared)", "j: 0", "j: 1", "j: 2"],
                    },
                    QueueState {
                        name: MACRO,
                        items: &["var cb", "var cb", "var cb", "let cb", "let cb", "let cb"],
                    },
                ],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Macrotask",
                description: "The var callbacks run. Every one reads the shared i, so all three print 3.",
                highlight_lines: &[1],
                call_stack: &["var cb"],
                queues: &[
                    QueueState {
                        name: ENVS,
                        items: &["i: 3 (shared)", "j: 0", "j: 1", "j: 2"],
                    },
                    QueueState { name: MACRO, items: &["let cb", "let cb", "let cb"] },
                ],
                output: &["var 3", "var 3", "var 3"],
            },
            ConceptStep {
                phase: "Macrotask",
                description: "The let callbacks each close over their own j and print the value from their iteration.",
                highlight_lines: &[5],
                call_stack: &["let cb"],
                queues: &[
                    QueueState {
                        name: ENVS,
                        items: &["i: 3 (shared)", "j: 0", "j: 1", "j: 2"],
                    },
                    QueueState { name: MACRO, items: &[] },
                ],
                output: &["var 3", "var 3", "var 3", "let 0", "let 1", "let 2"],
            },
        ],
        insight: "var has one binding per function, let has one per loop \
                  iteration. Closures capture bindings, not values, which is \
                  the whole difference here.",
    }
}
