//! Recursion walkthroughs: the call stack growing and unwinding.

use crate::catalog::ConceptStep;
use crate::stepper::{Catalog, CatalogError, Example, Level};

pub fn catalog() -> Result<Catalog<ConceptStep>, CatalogError> {
    Catalog::new(vec![
        (Level::Beginner, vec![factorial()]),
        (Level::Intermediate, vec![fibonacci()]),
    ])
}

fn factorial() -> Example<ConceptStep> {
    Example {
        title: "factorial(3), Frame by Frame",
        code: &[
            "function factorial(n) {",
            "  if (n <= 1) return 1;",
            "  return n * factorial(n - 1);",
            "}",
            "",
            "console.log(factorial(3));",
        ],
        steps: vec![
            ConceptStep {
                phase: "Descend",
                description: "factorial(3) is called. n > 1, so it needs factorial(2) before it can return.",
                highlight_lines: &[2, 5],
                call_stack: &["<script>", "factorial(3)"],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Descend",
                description: "factorial(2) is pushed on top. The outer call is paused mid-expression, waiting.",
                highlight_lines: &[2],
                call_stack: &["<script>", "factorial(3)", "factorial(2)"],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Base",
                description: "factorial(1) hits the base case and returns 1 without recursing further.",
                highlight_lines: &[1],
                call_stack: &["<script>", "factorial(3)", "factorial(2)", "factorial(1)"],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Unwind",
                description: "factorial(1)'s frame pops. factorial(2) resumes: 2 * 1 = 2.",
                highlight_lines: &[2],
                call_stack: &["<script>", "factorial(3)", "factorial(2)"],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Unwind",
                description: "factorial(2) returns 2 and pops. factorial(3) resumes: 3 * 2 = 6.",
                highlight_lines: &[2],
                call_stack: &["<script>", "factorial(3)"],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Done",
                description: "The last frame pops and the result reaches console.log.",
                highlight_lines: &[5],
                call_stack: &["<script>"],
                output: &["6"],
                ..ConceptStep::EMPTY
            },
        ],
        insight: "Every recursive call is a real stack frame holding its own n. \
                  The multiplications happen on the way BACK UP, as the frames \
                  pop in reverse order.",
    }
}

fn fibonacci() -> Example<ConceptStep> {
    Example {
        title: "fib(3) Branches Twice",
        code: &[
            "function fib(n) {",
            "  if (n < 2) return n;",
            "  return fib(n - 1) + fib(n - 2);",
            "}",
            "",
            "console.log(fib(3));",
        ],
        steps: vec![
            ConceptStep {
                phase: "Descend",
                description: "fib(3) needs BOTH fib(2) and fib(1). It evaluates them left to right: fib(2) first.",
                highlight_lines: &[2, 5],
                call_stack: &["<script>", "fib(3)"],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Descend",
                description: "fib(2) recurses in turn: fib(1) is pushed on top of it.",
                highlight_lines: &[2],
                call_stack: &["<script>", "fib(3)", "fib(2)", "fib(1)"],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Base",
                description: "fib(1) returns 1. fib(2) still needs its second operand, fib(0).",
                highlight_lines: &[1],
                call_stack: &["<script>", "fib(3)", "fib(2)", "fib(0)"],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Unwind",
                description: "fib(0) returns 0, so fib(2) = 1 + 0 = 1 and its frame pops.",
                highlight_lines: &[2],
                call_stack: &["<script>", "fib(3)"],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Descend",
                description: "Back in fib(3), the RIGHT branch runs now: fib(1) is called a second time, repeating work already done.",
                highlight_lines: &[2],
                call_stack: &["<script>", "fib(3)", "fib(1)"],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Done",
                description: "fib(1) returns 1 again, so fib(3) = 1 + 1 = 2.",
                highlight_lines: &[5],
                call_stack: &["<script>"],
                output: &["2"],
                ..ConceptStep::EMPTY
            },
        ],
        insight: "Naive fib recomputes the same subproblems: fib(1) ran twice \
                  here and the duplication explodes with n. Memoization exists \
                  precisely to cache those repeated frames away.",
    }
}
