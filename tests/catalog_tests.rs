// Integration tests for the bundled concept content

use jstty::catalog::{self, CONCEPTS};
use jstty::stepper::Stepper;

#[test]
fn every_concept_builds() {
    for concept in CONCEPTS {
        let catalog = (concept.build)()
            .unwrap_or_else(|e| panic!("concept '{}' failed to build: {}", concept.slug, e));
        assert!(
            !catalog.levels().is_empty(),
            "concept '{}' has no levels",
            concept.slug
        );
    }
}

#[test]
fn concept_slugs_are_unique_and_findable() {
    for (i, concept) in CONCEPTS.iter().enumerate() {
        assert!(
            CONCEPTS[i + 1..].iter().all(|c| c.slug != concept.slug),
            "duplicate slug '{}'",
            concept.slug
        );
        let found = catalog::find(concept.slug).expect("slug resolves");
        assert_eq!(found.title, concept.title);
    }
    assert!(catalog::find("no-such-concept").is_none());
}

#[test]
fn highlight_lines_stay_inside_each_code_listing() {
    for concept in CONCEPTS {
        let catalog = (concept.build)().expect("valid content");
        for &level in catalog.levels() {
            for example in catalog.examples(level) {
                for (i, step) in example.steps.iter().enumerate() {
                    for &line in step.highlight_lines {
                        assert!(
                            line < example.code.len(),
                            "concept '{}', {} / \"{}\", step {}: highlight line {} out of range ({} code lines)",
                            concept.slug,
                            level,
                            example.title,
                            i,
                            line,
                            example.code.len()
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn every_step_has_a_description() {
    for concept in CONCEPTS {
        let catalog = (concept.build)().expect("valid content");
        for &level in catalog.levels() {
            for example in catalog.examples(level) {
                assert!(!example.title.is_empty());
                assert!(!example.insight.is_empty());
                for (i, step) in example.steps.iter().enumerate() {
                    assert!(
                        !step.description.is_empty(),
                        "concept '{}', \"{}\", step {} has no description",
                        concept.slug,
                        example.title,
                        i
                    );
                }
            }
        }
    }
}

#[test]
fn stepper_walks_every_example_end_to_end() {
    for concept in CONCEPTS {
        let catalog = (concept.build)().expect("valid content");
        let mut stepper = Stepper::new(catalog);

        let levels: Vec<_> = stepper.catalog().levels().to_vec();
        for level in levels {
            assert!(stepper.change_level(level));
            let example_count = stepper.catalog().examples(level).len();
            for i in 0..example_count {
                assert!(stepper.change_example(i));
                assert_eq!(stepper.step_index(), 0);
                let total = stepper.step_count();
                let mut visited = 1;
                while stepper.next() {
                    visited += 1;
                }
                assert_eq!(
                    visited, total,
                    "concept '{}', level {}, example {}: walked {} of {} steps",
                    concept.slug, level, i, visited, total
                );
                assert!(!stepper.can_next());
            }
        }
    }
}

#[test]
fn selector_matches_the_steppers_current_step() {
    let concept = catalog::find("event-loop").expect("bundled concept");
    let catalog = (concept.build)().expect("valid content");
    let mut stepper = Stepper::new(catalog);

    loop {
        let level = stepper.level();
        let (ei, si) = (stepper.example_index(), stepper.step_index());
        assert_eq!(
            stepper.catalog().step(level, ei, si),
            stepper.current_step()
        );
        if !stepper.next() {
            break;
        }
    }
}
