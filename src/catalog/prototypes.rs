//! Prototype chain walkthroughs: property lookup along `[[Prototype]]` links.

use crate::catalog::{ConceptStep, QueueState};
use crate::stepper::{Catalog, CatalogError, Example, Level};

const CHAIN: &str = "Prototype Chain";

pub fn catalog() -> Result<Catalog<ConceptStep>, CatalogError> {
    Catalog::new(vec![
        (Level::Beginner, vec![property_lookup()]),
        (Level::Intermediate, vec![constructor_new()]),
    ])
}

fn property_lookup() -> Example<ConceptStep> {
    Example {
        title: "Walking the Chain",
        code: &[
            "const animal = { eats: true };",
            "const rabbit = Object.create(animal);",
            "rabbit.hops = true;",
            "",
            "console.log(rabbit.hops);",
            "console.log(rabbit.eats);",
            "console.log(rabbit.flies);",
        ],
        steps: vec![
            ConceptStep {
                phase: "Setup",
                description: "rabbit is created with animal as its prototype, then gets an own property hops.",
                highlight_lines: &[0, 1, 2],
                queues: &[QueueState {
                    name: CHAIN,
                    items: &["rabbit { hops }", "animal { eats }", "Object.prototype", "null"],
                }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Own",
                description: "rabbit.hops: found directly on rabbit. Lookup stops at the first hit.",
                highlight_lines: &[4],
                queues: &[QueueState {
                    name: CHAIN,
                    items: &["rabbit { hops } <- found here", "animal { eats }", "Object.prototype", "null"],
                }],
                output: &["true"],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Inherited",
                description: "rabbit.eats: not on rabbit, so the engine follows [[Prototype]] to animal and finds it there.",
                highlight_lines: &[5],
                queues: &[QueueState {
                    name: CHAIN,
                    items: &["rabbit { hops }", "animal { eats } <- found here", "Object.prototype", "null"],
                }],
                output: &["true", "true"],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Miss",
                description: "rabbit.flies: the walk reaches null without a hit, so the result is undefined. No error.",
                highlight_lines: &[6],
                queues: &[QueueState {
                    name: CHAIN,
                    items: &["rabbit { hops }", "animal { eats }", "Object.prototype", "null <- end of chain"],
                }],
                output: &["true", "true", "undefined"],
                ..ConceptStep::EMPTY
            },
        ],
        insight: "Property reads walk the prototype chain until a hit or null. \
                  Property WRITES do not: assignment always creates or updates \
                  an own property on the receiver.",
    }
}

fn constructor_new() -> Example<ConceptStep> {
    Example {
        title: "What new Actually Does",
        code: &[
            "function Dog(name) {",
            "  this.name = name;",
            "}",
            "Dog.prototype.bark = function () {",
            "  return this.name + ' says woof';",
            "};",
            "",
            "const rex = new Dog('Rex');",
            "console.log(rex.bark());",
        ],
        steps: vec![
            ConceptStep {
                phase: "Setup",
                description: "Dog is a plain function. Its prototype object holds the shared bark method.",
                highlight_lines: &[0, 1, 2, 3, 4, 5],
                queues: &[QueueState {
                    name: CHAIN,
                    items: &["Dog.prototype { bark }", "Object.prototype", "null"],
                }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Construct",
                description: "new creates a fresh object whose [[Prototype]] is Dog.prototype, then calls Dog with this bound to it.",
                highlight_lines: &[7],
                call_stack: &["<script>", "Dog"],
                queues: &[QueueState {
                    name: CHAIN,
                    items: &["rex {}", "Dog.prototype { bark }", "Object.prototype", "null"],
                }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Construct",
                description: "Inside the constructor, this.name = 'Rex' puts an own property on the new object.",
                highlight_lines: &[1],
                call_stack: &["<script>", "Dog"],
                queues: &[QueueState {
                    name: CHAIN,
                    items: &["rex { name: 'Rex' }", "Dog.prototype { bark }", "Object.prototype", "null"],
                }],
                ..ConceptStep::EMPTY
            },
            ConceptStep {
                phase: "Lookup",
                description: "rex.bark is not an own property; it is found one link up on Dog.prototype and called with this = rex.",
                highlight_lines: &[8],
                call_stack: &["<script>", "bark"],
                queues: &[QueueState {
                    name: CHAIN,
                    items: &["rex { name: 'Rex' }", "Dog.prototype { bark } <- found here", "Object.prototype", "null"],
                }],
                output: &["Rex says woof"],
            },
        ],
        insight: "Methods live once on the prototype and are shared by every \
                  instance; new just wires the chain and binds this. class \
                  syntax compiles down to exactly this arrangement.",
    }
}
