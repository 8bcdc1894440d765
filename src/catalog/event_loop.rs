//! Event loop walkthroughs: call stack, microtask and macrotask queues.

use crate::catalog::{ConceptStep, QueueState};
use crate::stepper::{Catalog, CatalogError, Example, Level};

pub fn catalog() -> Result<Catalog<ConceptStep>, CatalogError> {
    Catalog::new(vec![
        (Level::Beginner, vec![microtasks_first()]),
        (Level::Intermediate, vec![nested_microtasks()]),
        (Level::Advanced, vec![timer_interleaving()]),
    ])
}

fn microtasks_first() -> Example<ConceptStep> {
    const MICRO: &str = "Microtasks";
    const MACRO: &str = "Macrotasks";
    Example {
        title: "Microtasks Run First",
        code: &[
            "console.log('1');",
            "",
            "setTimeout(() => {",
            "  console.log('timeout');",
            "}, 0);",
            "",
            "Promise.resolve()",
            "  .then(() => console.log('promise'));",
            "",
            "console.log('2');",
        ],
        steps: vec![
            ConceptStep {
                phase: "Sync",
                description: "Script starts executing. The global execution context is pushed onto the call stack.",
                call_stack: &["<script>"],
                queues: &[
                    QueueState { name: MICRO, items: &[] },
                    QueueState { name: MACRO, items: &[] },
                ],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Sync",
                description: "console.log('1') executes immediately (synchronous).",
                highlight_lines: &[0],
                call_stack: &["<script>", "console.log('1')"],
                queues: &[
                    QueueState { name: MICRO, items: &[] },
                    QueueState { name: MACRO, items: &[] },
                ],
                output: &["1"],
            },
            ConceptStep {
                phase: "Sync",
                description: "setTimeout hands its callback to the host. After 0 ms it is queued as a macrotask.",
                highlight_lines: &[2, 3, 4],
                call_stack: &["<script>"],
                queues: &[
                    QueueState { name: MICRO, items: &[] },
                    QueueState { name: MACRO, items: &["timeout cb"] },
                ],
                output: &["1"],
            },
            ConceptStep {
                phase: "Sync",
                description: ".then() registers its callback in the microtask queue.",
                highlight_lines: &[6, 7],
                call_stack: &["<script>"],
                queues: &[
                    QueueState { name: MICRO, items: &["promise cb"] },
                    QueueState { name: MACRO, items: &["timeout cb"] },
                ],
                output: &["1"],
            },
            ConceptStep {
                phase: "Sync",
                description: "console.log('2') executes immediately (synchronous).",
                highlight_lines: &[9],
                call_stack: &["<script>", "console.log('2')"],
                queues: &[
                    QueueState { name: MICRO, items: &["promise cb"] },
                    QueueState { name: MACRO, items: &["timeout cb"] },
                ],
                output: &["1", "2"],
            },
            ConceptStep {
                phase: "Idle",
                description: "Synchronous code is done and the script pops off. The event loop checks microtasks FIRST.",
                call_stack: &[],
                queues: &[
                    QueueState { name: MICRO, items: &["promise cb"] },
                    QueueState { name: MACRO, items: &["timeout cb"] },
                ],
                output: &["1", "2"],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Microtask",
                description: "Microtask runs: the promise callback executes.",
                highlight_lines: &[7],
                call_stack: &["promise cb"],
                queues: &[
                    QueueState { name: MICRO, items: &[] },
                    QueueState { name: MACRO, items: &["timeout cb"] },
                ],
                output: &["1", "2", "promise"],
            },
            ConceptStep {
                phase: "Idle",
                description: "Microtask queue is empty. Now the event loop takes the oldest macrotask.",
                call_stack: &[],
                queues: &[
                    QueueState { name: MICRO, items: &[] },
                    QueueState { name: MACRO, items: &["timeout cb"] },
                ],
                output: &["1", "2", "promise"],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Macrotask",
                description: "Macrotask runs: the setTimeout callback executes.",
                highlight_lines: &[3],
                call_stack: &["timeout cb"],
                queues: &[
                    QueueState { name: MICRO, items: &[] },
                    QueueState { name: MACRO, items: &[] },
                ],
                output: &["1", "2", "promise", "timeout"],
            },
            ConceptStep {
                phase: "Idle",
                description: "All queues empty. The event loop waits for new tasks.",
                call_stack: &[],
                queues: &[
                    QueueState { name: MICRO, items: &[] },
                    QueueState { name: MACRO, items: &[] },
                ],
                output: &["1", "2", "promise", "timeout"],
                ..ConceptStep::EMPTY
            },
        ],
        insight: "setTimeout(fn, 0) never runs before pending microtasks: the \
                  event loop drains the whole microtask queue before it even \
                  looks at macrotasks.",
    }
}

fn nested_microtasks() -> Example<ConceptStep> {
    const MICRO: &str = "Microtasks";
    const MACRO: &str = "Macrotasks";
    Example {
        title: "Microtasks Queue More Microtasks",
        code: &[
            "setTimeout(() => console.log('timeout'), 0);",
            "",
            "Promise.resolve()",
            "  .then(() => {",
            "    console.log('then 1');",
            "    Promise.resolve().then(() => console.log('then 2'));",
            "  });",
        ],
        steps: vec![
            ConceptStep {
                phase: "Sync",
                description: "setTimeout queues its callback as a macrotask; .then() queues the first microtask. Script finishes.",
                highlight_lines: &[0, 2, 3],
                call_stack: &[],
                queues: &[
                    QueueState { name: MICRO, items: &["then 1 cb"] },
                    QueueState { name: MACRO, items: &["timeout cb"] },
                ],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Microtask",
                description: "First microtask runs and logs 'then 1'.",
                highlight_lines: &[4],
                call_stack: &["then 1 cb"],
                queues: &[
                    QueueState { name: MICRO, items: &[] },
                    QueueState { name: MACRO, items: &["timeout cb"] },
                ],
                output: &["then 1"],
            },
            ConceptStep {
                phase: "Microtask",
                description: "While running, it schedules ANOTHER microtask. The new microtask joins the queue that is currently draining.",
                highlight_lines: &[5],
                call_stack: &["then 1 cb"],
                queues: &[
                    QueueState { name: MICRO, items: &["then 2 cb"] },
                    QueueState { name: MACRO, items: &["timeout cb"] },
                ],
                output: &["then 1"],
            },
            ConceptStep {
                phase: "Microtask",
                description: "The queue is drained to empty before any macrotask: 'then 2' runs next, not the timeout.",
                highlight_lines: &[5],
                call_stack: &["then 2 cb"],
                queues: &[
                    QueueState { name: MICRO, items: &[] },
                    QueueState { name: MACRO, items: &["timeout cb"] },
                ],
                output: &["then 1", "then 2"],
            },
            ConceptStep {
                phase: "Macrotask",
                description: "Only now does the macrotask get its turn.",
                highlight_lines: &[0],
                call_stack: &["timeout cb"],
                queues: &[
                    QueueState { name: MICRO, items: &[] },
                    QueueState { name: MACRO, items: &[] },
                ],
                output: &["then 1", "then 2", "timeout"],
            },
        ],
        insight: "The microtask queue is drained completely, including \
                  microtasks queued while draining. A microtask that keeps \
                  queueing more microtasks starves every timer on the page.",
    }
}

fn timer_interleaving() -> Example<ConceptStep> {
    const MICRO: &str = "Microtasks";
    const MACRO: &str = "Macrotasks";
    Example {
        title: "One Macrotask Per Turn",
        code: &[
            "setTimeout(() => {",
            "  console.log('timer 1');",
            "  Promise.resolve().then(() => console.log('micro'));",
            "}, 0);",
            "",
            "setTimeout(() => console.log('timer 2'), 0);",
        ],
        steps: vec![
            ConceptStep {
                phase: "Sync",
                description: "Both timers fire immediately and queue two macrotasks in order. Script finishes.",
                highlight_lines: &[0, 5],
                call_stack: &[],
                queues: &[
                    QueueState { name: MICRO, items: &[] },
                    QueueState { name: MACRO, items: &["timer 1 cb", "timer 2 cb"] },
                ],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Macrotask",
                description: "The loop takes ONE macrotask: timer 1 runs and logs.",
                highlight_lines: &[1],
                call_stack: &["timer 1 cb"],
                queues: &[
                    QueueState { name: MICRO, items: &[] },
                    QueueState { name: MACRO, items: &["timer 2 cb"] },
                ],
                output: &["timer 1"],
            },
            ConceptStep {
                phase: "Macrotask",
                description: "Timer 1 schedules a microtask before returning.",
                highlight_lines: &[2],
                call_stack: &["timer 1 cb"],
                queues: &[
                    QueueState { name: MICRO, items: &["micro cb"] },
                    QueueState { name: MACRO, items: &["timer 2 cb"] },
                ],
                output: &["timer 1"],
            },
            ConceptStep {
                phase: "Microtask",
                description: "Between macrotasks the microtask checkpoint runs: 'micro' beats 'timer 2' even though timer 2 was queued first.",
                highlight_lines: &[2],
                call_stack: &["micro cb"],
                queues: &[
                    QueueState { name: MICRO, items: &[] },
                    QueueState { name: MACRO, items: &["timer 2 cb"] },
                ],
                output: &["timer 1", "micro"],
            },
            ConceptStep {
                phase: "Macrotask",
                description: "Next turn of the loop: timer 2 finally runs.",
                highlight_lines: &[5],
                call_stack: &["timer 2 cb"],
                queues: &[
                    QueueState { name: MICRO, items: &[] },
                    QueueState { name: MACRO, items: &[] },
                ],
                output: &["timer 1", "micro", "timer 2"],
            },
        ],
        insight: "The loop processes one macrotask per turn and runs a full \
                  microtask checkpoint after each, which is why a microtask \
                  queued inside a timer outruns the next pending timer.",
    }
}
