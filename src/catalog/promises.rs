//! Promise walkthroughs: states, chaining, combinators.
//!
//! Promise boxes are rendered through the queues pane: one named collection
//! per step listing each promise and its current state.

use crate::catalog::{ConceptStep, QueueState};
use crate::stepper::{Catalog, CatalogError, Example, Level};

const PROMISES: &str = "Promises";

pub fn catalog() -> Result<Catalog<ConceptStep>, CatalogError> {
    Catalog::new(vec![
        (Level::Beginner, vec![promise_states(), promise_chaining()]),
        (Level::Intermediate, vec![promise_all(), then_catch_routing()]),
        (Level::Advanced, vec![await_desugared()]),
    ])
}

fn promise_states() -> Example<ConceptStep> {
    Example {
        title: "Promise States",
        code: &[
            "const p = new Promise((resolve, reject) => {",
            "  setTimeout(() => {",
            "    resolve(\"Success!\");",
            "  }, 1000);",
            "});",
            "",
            "p.then(value => {",
            "  console.log(value);",
            "});",
        ],
        steps: vec![
            ConceptStep {
                phase: "Creation",
                description: "Promise created. It starts in the PENDING state.",
                highlight_lines: &[0, 1, 2, 3, 4],
                queues: &[QueueState { name: PROMISES, items: &["p: pending"] }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Waiting",
                description: ".then() handler registered. The promise is still pending.",
                highlight_lines: &[6, 7, 8],
                queues: &[QueueState { name: PROMISES, items: &["p: pending"] }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Settling",
                description: "After one second resolve() is called. The promise is FULFILLED with \"Success!\".",
                highlight_lines: &[2],
                queues: &[QueueState { name: PROMISES, items: &["p: fulfilled(\"Success!\")"] }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Execution",
                description: "The .then() callback runs with the resolved value.",
                highlight_lines: &[7],
                call_stack: &["then cb"],
                queues: &[QueueState { name: PROMISES, items: &["p: fulfilled(\"Success!\")"] }],
                output: &["Success!"],
            },
        ],
        insight: "A promise transitions from pending to fulfilled (or rejected) \
                  exactly once. Once settled it never changes again.",
    }
}

fn promise_chaining() -> Example<ConceptStep> {
    Example {
        title: "Promise Chaining",
        code: &[
            "Promise.resolve(1)",
            "  .then(x => x + 1)",
            "  .then(x => x * 2)",
            "  .then(x => console.log(x));",
        ],
        steps: vec![
            ConceptStep {
                phase: "Start",
                description: "Promise.resolve(1) creates a promise already fulfilled with 1.",
                highlight_lines: &[0],
                queues: &[QueueState { name: PROMISES, items: &["P1: fulfilled(1)"] }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Chain",
                description: "The first .then() returns a NEW promise fulfilled with x + 1 = 2.",
                highlight_lines: &[1],
                call_stack: &["then cb #1"],
                queues: &[QueueState {
                    name: PROMISES,
                    items: &["P1: fulfilled(1)", "P2: fulfilled(2)"],
                }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Chain",
                description: "The second .then() returns another promise fulfilled with x * 2 = 4.",
                highlight_lines: &[2],
                call_stack: &["then cb #2"],
                queues: &[QueueState {
                    name: PROMISES,
                    items: &["P1: fulfilled(1)", "P2: fulfilled(2)", "P3: fulfilled(4)"],
                }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Complete",
                description: "The final .then() logs the result: 4.",
                highlight_lines: &[3],
                call_stack: &["then cb #3"],
                queues: &[QueueState {
                    name: PROMISES,
                    items: &["P1: fulfilled(1)", "P2: fulfilled(2)", "P3: fulfilled(4)"],
                }],
                output: &["4"],
            },
        ],
        insight: "Each .then() returns a NEW promise, which is what makes \
                  chains possible. The value flows through like water in pipes.",
    }
}

fn promise_all() -> Example<ConceptStep> {
    Example {
        title: "Promise.all() Fails Fast",
        code: &[
            "const p1 = Promise.resolve(1);",
            "const p2 = Promise.resolve(2);",
            "const p3 = Promise.reject(\"Error!\");",
            "",
            "Promise.all([p1, p2, p3])",
            "  .then(r => console.log(r))",
            "  .catch(e => console.log(e));",
        ],
        steps: vec![
            ConceptStep {
                phase: "Setup",
                description: "Three promises created: p1 and p2 fulfilled, p3 rejected.",
                highlight_lines: &[0, 1, 2],
                queues: &[QueueState {
                    name: PROMISES,
                    items: &[
                        "p1: fulfilled(1)",
                        "p2: fulfilled(2)",
                        "p3: rejected(\"Error!\")",
                    ],
                }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Execution",
                description: "Promise.all() watches all three promises at once.",
                highlight_lines: &[4],
                queues: &[QueueState {
                    name: PROMISES,
                    items: &[
                        "p1: fulfilled(1)",
                        "p2: fulfilled(2)",
                        "p3: rejected(\"Error!\")",
                        "all: pending",
                    ],
                }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Fail Fast",
                description: "p3 is rejected, so Promise.all() rejects immediately without waiting for the others.",
                highlight_lines: &[4],
                queues: &[QueueState {
                    name: PROMISES,
                    items: &[
                        "p1: fulfilled(1)",
                        "p2: fulfilled(2)",
                        "p3: rejected(\"Error!\")",
                        "all: rejected(\"Error!\")",
                    ],
                }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Handling",
                description: "The .then() is skipped; the .catch() handler receives the rejection reason.",
                highlight_lines: &[6],
                call_stack: &["catch cb"],
                queues: &[QueueState {
                    name: PROMISES,
                    items: &[
                        "p1: fulfilled(1)",
                        "p2: fulfilled(2)",
                        "p3: rejected(\"Error!\")",
                        "all: rejected(\"Error!\")",
                    ],
                }],
                output: &["Error!"],
            },
        ],
        insight: "Promise.all() is all-or-nothing: one rejection rejects the \
                  combined promise immediately. Use Promise.allSettled() when \
                  every outcome matters.",
    }
}

fn then_catch_routing() -> Example<ConceptStep> {
    Example {
        title: "Rejections Skip to catch",
        code: &[
            "Promise.reject(\"boom\")",
            "  .then(x => console.log('A', x))",
            "  .then(x => console.log('B', x))",
            "  .catch(e => console.log('C', e))",
            "  .then(() => console.log('D'));",
        ],
        steps: vec![
            ConceptStep {
                phase: "Start",
                description: "Promise.reject(\"boom\") creates a promise already rejected.",
                highlight_lines: &[0],
                queues: &[QueueState { name: PROMISES, items: &["P1: rejected(\"boom\")"] }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Skip",
                description: "Both .then() fulfillment handlers are skipped; the rejection passes straight through them.",
                highlight_lines: &[1, 2],
                queues: &[QueueState {
                    name: PROMISES,
                    items: &["P1: rejected(\"boom\")", "P2: rejected(\"boom\")", "P3: rejected(\"boom\")"],
                }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Catch",
                description: ".catch() handles the rejection and logs it.",
                highlight_lines: &[3],
                call_stack: &["catch cb"],
                queues: &[QueueState {
                    name: PROMISES,
                    items: &["P3: rejected(\"boom\")", "P4: fulfilled(undefined)"],
                }],
                output: &["C boom"],
            },
            ConceptStep {
                phase: "Recovered",
                description: "A .catch() that returns normally produces a FULFILLED promise, so the chain continues.",
                highlight_lines: &[4],
                call_stack: &["then cb"],
                queues: &[QueueState {
                    name: PROMISES,
                    items: &["P4: fulfilled(undefined)", "P5: fulfilled(undefined)"],
                }],
                output: &["C boom", "D"],
            },
        ],
        insight: "A rejection travels down the chain until the first rejection \
                  handler. Handling it recovers the chain: everything after the \
                  .catch() sees a fulfilled promise.",
    }
}

fn await_desugared() -> Example<ConceptStep> {
    const MICRO: &str = "Microtasks";
    Example {
        title: "await Is a then Under the Hood",
        code: &[
            "async function main() {",
            "  console.log('before');",
            "  const v = await Promise.resolve(42);",
            "  console.log('after', v);",
            "}",
            "",
            "main();",
            "console.log('sync');",
        ],
        steps: vec![
            ConceptStep {
                phase: "Sync",
                description: "main() is called and runs synchronously up to the first await.",
                highlight_lines: &[1, 6],
                call_stack: &["<script>", "main"],
                output: &["before"],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Suspend",
                description: "await suspends main() and schedules its continuation as a microtask, exactly like .then().",
                highlight_lines: &[2],
                call_stack: &["<script>"],
                queues: &[QueueState { name: MICRO, items: &["main continuation"] }],
                output: &["before"],
            },
            ConceptStep {
                phase: "Sync",
                description: "The caller keeps running: 'sync' logs before the awaited value is seen.",
                highlight_lines: &[7],
                call_stack: &["<script>"],
                queues: &[QueueState { name: MICRO, items: &["main continuation"] }],
                output: &["before", "sync"],
            },
            ConceptStep {
                phase: "Microtask",
                description: "The script finishes and the microtask resumes main() with v = 42.",
                highlight_lines: &[3],
                call_stack: &["main continuation"],
                output: &["before", "sync", "after 42"],
                ..ConceptStep::EMPTY
            },
        ],
        insight: "async/await is promise chaining in sequential clothing: \
                  every await splits the function at that point and queues the \
                  rest as a microtask.",
    }
}
