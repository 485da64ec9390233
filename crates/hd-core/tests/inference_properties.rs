//! Property-based tests for exact inference invariants.

use hd_common::PersonId;
use hd_core::inference::InferenceEngine;
use hd_core::pedigree::{Individual, Pedigree};
use hd_math::is_distribution;
use proptest::prelude::*;

/// A small random pedigree: founders first, then children of earlier people.
///
/// Each entry is `(parents, observed)`; `parents` picks two earlier
/// individuals by index when there are at least two of them.
fn pedigree_strategy() -> impl Strategy<Value = Vec<(Option<(usize, usize)>, Option<bool>)>> {
    prop::collection::vec(
        (
            prop::option::of((0usize..8, 0usize..8)),
            prop::option::of(any::<bool>()),
        ),
        1..=4,
    )
}

fn build(layout: &[(Option<(usize, usize)>, Option<bool>)], swap: bool) -> Pedigree {
    let mut individuals = Vec::new();
    for (i, (parents, observed)) in layout.iter().enumerate() {
        let name = format!("p{i}");
        let individual = match parents {
            Some((m, f)) if i >= 2 => {
                let mother = m % i;
                let mut father = f % i;
                if father == mother {
                    father = (mother + 1) % i;
                }
                let (mother, father) = if swap { (father, mother) } else { (mother, father) };
                Individual::child(name, format!("p{mother}"), format!("p{father}"), *observed)
            }
            _ => Individual::founder(name, *observed),
        };
        individuals.push(individual);
    }
    Pedigree::new(individuals).expect("generated pedigree is valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_distribution_sums_to_one(layout in pedigree_strategy()) {
        let pedigree = build(&layout, false);
        let result = InferenceEngine::default().infer(&pedigree).unwrap();
        prop_assert_eq!(result.table.len(), pedigree.len());
        for p in &result.table {
            prop_assert!(is_distribution(&p.gene.as_array(), 1e-9), "gene total {}", p.gene.total());
            prop_assert!(is_distribution(&[p.expression.present, p.expression.absent], 1e-9));
            for v in p.gene.as_array() {
                prop_assert!((0.0..=1.0 + 1e-12).contains(&v));
            }
        }
    }

    #[test]
    fn observed_traits_are_certain(layout in pedigree_strategy()) {
        let pedigree = build(&layout, false);
        let result = InferenceEngine::default().infer(&pedigree).unwrap();
        for (id, observed) in pedigree.observed() {
            let p = result.table.get(id).unwrap();
            let expected = if observed { 1.0 } else { 0.0 };
            prop_assert!((p.expression.present - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn parent_roles_are_interchangeable(layout in pedigree_strategy()) {
        let a = InferenceEngine::default().infer(&build(&layout, false)).unwrap();
        let b = InferenceEngine::default().infer(&build(&layout, true)).unwrap();
        for p in &a.table {
            let q = b.table.get(&p.name).unwrap();
            for (x, y) in p.gene.as_array().iter().zip(q.gene.as_array()) {
                prop_assert!((x - y).abs() < 1e-12);
            }
            prop_assert!((p.expression.present - q.expression.present).abs() < 1e-12);
        }
    }

    #[test]
    fn world_count_matches_enumeration(layout in pedigree_strategy()) {
        let pedigree = build(&layout, false);
        let n = pedigree.len() as u32;
        let observed = pedigree.observed().count() as u32;
        let result = InferenceEngine::default().infer(&pedigree).unwrap();
        prop_assert_eq!(result.stats.trait_sets_considered, 2u64.pow(n));
        let accepted = 2u64.pow(n - observed);
        prop_assert_eq!(result.stats.trait_sets_considered - result.stats.trait_sets_rejected, accepted);
        prop_assert_eq!(result.stats.worlds_evaluated, accepted * 3u64.pow(n));
    }
}

#[test]
fn unobserved_founder_alone_keeps_prior() {
    let pedigree = Pedigree::new(vec![Individual::founder("solo", None)]).unwrap();
    let result = InferenceEngine::default().infer(&pedigree).unwrap();
    let p = result.table.get(&PersonId::from("solo")).unwrap();
    assert!((p.gene.two - 0.01).abs() < 1e-12);
}
