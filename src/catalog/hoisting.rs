//! Hoisting walkthroughs: what the engine moves to the top of a scope.

use crate::catalog::{ConceptStep, QueueState};
use crate::stepper::{Catalog, CatalogError, Example, Level};

const BINDINGS: &str = "Scope Bindings";

pub fn catalog() -> Result<Catalog<ConceptStep>, CatalogError> {
    Catalog::new(vec![
        (Level::Beginner, vec![var_hoisting()]),
        (Level::Intermediate, vec![tdz()]),
    ])
}

fn var_hoisting() -> Example<ConceptStep> {
    Example {
        title: "var Rises, Values Don't",
        code: &[
            "console.log(x);",
            "var x = 5;",
            "console.log(x);",
            "",
            "greet();",
            "function greet() {",
            "  console.log('hi');",
            "}",
        ],
        steps: vec![
            ConceptStep {
                phase: "Compile",
                description: "Before any line runs, the engine scans the scope: var x becomes a binding set to undefined, and function greet is hoisted WHOLE.",
                queues: &[QueueState {
                    name: BINDINGS,
                    items: &["x: undefined", "greet: function"],
                }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Execute",
                description: "Line 1 reads x before the assignment. The binding exists, so this logs undefined instead of throwing.",
                highlight_lines: &[0],
                call_stack: &["<script>"],
                queues: &[QueueState {
                    name: BINDINGS,
                    items: &["x: undefined", "greet: function"],
                }],
                output: &["undefined"],
            },
            ConceptStep {
                phase: "Execute",
                description: "The assignment itself stays where it was written: x becomes 5 only now.",
                highlight_lines: &[1, 2],
                call_stack: &["<script>"],
                queues: &[QueueState {
                    name: BINDINGS,
                    items: &["x: 5", "greet: function"],
                }],
                output: &["undefined", "5"],
            },
            ConceptStep {
                phase: "Execute",
                description: "greet() works above its declaration because function declarations hoist with their body.",
                highlight_lines: &[4, 6],
                call_stack: &["<script>", "greet"],
                queues: &[QueueState {
                    name: BINDINGS,
                    items: &["x: 5", "greet: function"],
                }],
                output: &["undefined", "5", "hi"],
            },
        ],
        insight: "Hoisting moves declarations, never assignments. var gives \
                  you a binding initialized to undefined; a function \
                  declaration gives you the whole function up front.",
    }
}

fn tdz() -> Example<ConceptStep> {
    Example {
        title: "let and the Temporal Dead Zone",
        code: &[
            "console.log(a);",
            "let a = 1;",
            "",
            "{",
            "  console.log(b); // ReferenceError",
            "  let b = 2;",
            "}",
        ],
        steps: vec![
            ConceptStep {
                phase: "Compile",
                description: "let a is hoisted too, but left UNINITIALIZED. Until its declaration runs, the binding is in the temporal dead zone.",
                queues: &[QueueState { name: BINDINGS, items: &["a: <TDZ>"] }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Throw",
                description: "Reading a inside the TDZ throws a ReferenceError. This is the difference from var's silent undefined.",
                highlight_lines: &[0],
                call_stack: &["<script>"],
                queues: &[QueueState { name: BINDINGS, items: &["a: <TDZ>"] }],
                output: &["ReferenceError: Cannot access 'a' before initialization"],
            },
            ConceptStep {
                phase: "Execute",
                description: "Had line 1 not thrown, the declaration would initialize a and end its dead zone.",
                highlight_lines: &[1],
                call_stack: &["<script>"],
                queues: &[QueueState { name: BINDINGS, items: &["a: 1"] }],
                output: &["ReferenceError: Cannot access 'a' before initialization"],
            },
            ConceptStep {
                phase: "Scope",
                description: "Each block gets its own dead zone: b is hoisted only to the top of its block, and reading it there throws the same way.",
                highlight_lines: &[3, 4, 5, 6],
                call_stack: &["<script>"],
                queues: &[QueueState { name: BINDINGS, items: &["a: 1", "b: <TDZ>"] }],
                output: &["ReferenceError: Cannot access 'a' before initialization"],
            },
        ],
        insight: "let and const hoist like var but stay uninitialized, so an \
                  early read fails loudly instead of quietly yielding \
                  undefined. The dead zone is temporal, not spatial: it ends \
                  when the declaration executes, not where it is written.",
    }
}
