//! Property tests for argument order resolution and renaming.

use proptest::prelude::*;
use rephrase_core::{ConceptDictionary, Scenario, SpecArena, Specification, Step};
use rephrase_refactor::{create_agent, resolve_arg_order};
use std::collections::BTreeSet;

/// Distinct placeholder names `p0..p{n}` in a random order.
fn permuted_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    (0..=max)
        .prop_map(|n| (0..n).map(|i| format!("p{}", i)).collect::<Vec<_>>())
        .prop_shuffle()
}

fn template(prefix: &str, names: &[String]) -> String {
    let mut text = prefix.to_string();
    for name in names {
        text.push_str(&format!(" <{}>", name));
    }
    text
}

proptest! {
    #[test]
    fn same_name_sets_give_a_bijection(
        old in permuted_names(8),
        seed in any::<u64>(),
    ) {
        let mut new = old.clone();
        let len = new.len().max(1);
        new.rotate_left((seed as usize) % len);

        let order = resolve_arg_order(&old, &new);
        prop_assert_eq!(order.len(), new.len());
        let sources: BTreeSet<usize> = order.slots().iter().map(|s| s.unwrap()).collect();
        prop_assert_eq!(sources, (0..old.len()).collect::<BTreeSet<_>>());
        for (j, source) in order.slots().iter().enumerate() {
            prop_assert_eq!(&old[source.unwrap()], &new[j]);
        }
    }

    #[test]
    fn new_names_are_unsourced_and_left_bare(
        old in permuted_names(5),
        added in 1usize..4,
    ) {
        let mut new = old.clone();
        for i in 0..added {
            new.push(format!("new{}", i));
        }
        let agent = create_agent(&template("do", &old), &template("redo", &new)).unwrap();
        let order = agent.arg_order();
        prop_assert_eq!(order.introduced(), (old.len()..new.len()).collect::<Vec<_>>());

        let values: Vec<String> = (0..old.len()).map(|i| format!("v{}", i)).collect();
        let text = agent.generate_step_name(&values, order);
        for i in 0..added {
            let bare = format!("<new{}>", i);
            prop_assert!(text.contains(&bare));
        }
    }

    #[test]
    fn dropped_names_leave_the_argument_list(
        old in permuted_names(6),
        keep in proptest::collection::vec(any::<bool>(), 6),
    ) {
        let new: Vec<String> = old
            .iter()
            .zip(keep.iter())
            .filter(|(_, k)| **k)
            .map(|(n, _)| n.clone())
            .collect();
        let agent = create_agent(&template("do", &old), &template("redo", &new)).unwrap();

        let inline: Vec<String> = old.iter().map(|n| format!("\"val-{}\"", n)).collect();
        let mut specs = SpecArena::new();
        let id = specs.insert(
            Specification::new("Spec", "p.spec").with_scenario(Scenario::new(
                "Scenario",
                vec![Step::parse(&format!("do {}", inline.join(" "))).unwrap()],
            )),
        );
        agent.rephrase(&mut specs, &mut ConceptDictionary::new());

        let rewritten = &specs[id].scenarios[0].steps[0];
        let got: Vec<String> = rewritten.args.iter().map(|a| a.value.clone()).collect();
        let want: Vec<String> = new.iter().map(|n| format!("val-{}", n)).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn rename_rewrites_exactly_the_matching_steps(
        layout in proptest::collection::vec(proptest::collection::vec(any::<bool>(), 0..5), 0..4),
    ) {
        let agent = create_agent("first step", "second step").unwrap();
        let scenarios: Vec<Scenario> = layout
            .iter()
            .map(|steps| {
                Scenario::new(
                    "Scenario",
                    steps
                        .iter()
                        .map(|m| Step::parse(if *m { "first step" } else { "other step" }).unwrap())
                        .collect(),
                )
            })
            .collect();
        let expected = layout.iter().flatten().filter(|m| **m).count();

        let mut specs = SpecArena::new();
        let id = specs.insert(
            scenarios
                .into_iter()
                .fold(Specification::new("Spec", "p.spec"), |s, sc| s.with_scenario(sc)),
        );
        let outcome = agent.rephrase(&mut specs, &mut ConceptDictionary::new());

        prop_assert_eq!(outcome.steps_rewritten(), expected);
        prop_assert_eq!(outcome.spec(id), Some(expected > 0));
        let remaining = specs[id].steps().filter(|s| s.value == "first step").count();
        prop_assert_eq!(remaining, 0);

        let again = agent.rephrase(&mut specs, &mut ConceptDictionary::new());
        prop_assert_eq!(again.spec(id), Some(false));
    }
}
