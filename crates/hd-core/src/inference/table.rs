//! Per-person probability accumulation and normalization.
//!
//! A [`ProbabilityTable`] starts at zero for every individual. Each enumerated
//! world adds its joint probability to one gene bucket and one trait bucket
//! per person. After enumeration, [`ProbabilityTable::normalize`] rescales
//! every distribution so it sums to one.

use std::collections::HashMap;

use hd_common::{GeneCount, PersonId};
use hd_math::{normalize_in_place, NormalizeOutcome};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::world::World;
use crate::pedigree::Pedigree;

/// Mass (or probability) per gene copy count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneScores {
    #[serde(rename = "0")]
    pub zero: f64,
    #[serde(rename = "1")]
    pub one: f64,
    #[serde(rename = "2")]
    pub two: f64,
}

impl GeneScores {
    pub fn get(&self, genes: GeneCount) -> f64 {
        match genes {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }

    fn slot(&mut self, genes: GeneCount) -> &mut f64 {
        match genes {
            GeneCount::Zero => &mut self.zero,
            GeneCount::One => &mut self.one,
            GeneCount::Two => &mut self.two,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.zero, self.one, self.two]
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }

    fn normalize(&mut self) -> NormalizeOutcome {
        let mut values = self.as_array();
        let outcome = normalize_in_place(&mut values);
        [self.zero, self.one, self.two] = values;
        outcome
    }
}

/// Mass (or probability) of showing and not showing the trait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitScores {
    #[serde(rename = "true")]
    pub present: f64,
    #[serde(rename = "false")]
    pub absent: f64,
}

impl TraitScores {
    pub fn get(&self, has_trait: bool) -> f64 {
        if has_trait {
            self.present
        } else {
            self.absent
        }
    }

    pub fn total(&self) -> f64 {
        self.present + self.absent
    }

    fn normalize(&mut self) -> NormalizeOutcome {
        let mut values = [self.present, self.absent];
        let outcome = normalize_in_place(&mut values);
        [self.present, self.absent] = values;
        outcome
    }
}

/// Gene and trait distributions for one individual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonPosterior {
    pub name: PersonId,
    pub gene: GeneScores,
    #[serde(rename = "trait")]
    pub expression: TraitScores,
}

impl PersonPosterior {
    fn empty(name: PersonId) -> Self {
        Self {
            name,
            gene: GeneScores::default(),
            expression: TraitScores::default(),
        }
    }
}

/// Running totals for every individual, in pedigree order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProbabilityTable {
    entries: Vec<PersonPosterior>,
    index: HashMap<PersonId, usize>,
}

impl ProbabilityTable {
    /// A zeroed table with one entry per individual.
    pub fn new(pedigree: &Pedigree) -> Self {
        let entries: Vec<PersonPosterior> = pedigree
            .ids()
            .map(|id| PersonPosterior::empty(id.clone()))
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(pos, e)| (e.name.clone(), pos))
            .collect();
        Self { entries, index }
    }

    /// Add the probability `p` of `world` to each person's matching buckets.
    pub fn update(&mut self, world: &World<'_>, p: f64) {
        for entry in &mut self.entries {
            *entry.gene.slot(world.genes(&entry.name)) += p;
            if world.has_trait(&entry.name) {
                entry.expression.present += p;
            } else {
                entry.expression.absent += p;
            }
        }
    }

    /// Rescale every distribution to sum to one.
    ///
    /// Distributions with a zero or non-finite total are left as they are.
    /// Returns how many distributions were skipped.
    pub fn normalize(&mut self) -> usize {
        let mut skipped = 0;
        for entry in &mut self.entries {
            for (field, outcome) in [
                ("gene", entry.gene.normalize()),
                ("trait", entry.expression.normalize()),
            ] {
                if outcome != NormalizeOutcome::Normalized {
                    warn!(person = %entry.name, field, ?outcome, "distribution left unnormalized");
                    skipped += 1;
                }
            }
        }
        skipped
    }

    pub fn get(&self, id: &PersonId) -> Option<&PersonPosterior> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PersonPosterior> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<PersonPosterior> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a ProbabilityTable {
    type Item = &'a PersonPosterior;
    type IntoIter = std::slice::Iter<'a, PersonPosterior>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::world::PersonSet;
    use crate::pedigree::Individual;

    fn pedigree() -> Pedigree {
        Pedigree::new(vec![
            Individual::child("Harry", "Lily", "James", None),
            Individual::founder("James", Some(true)),
            Individual::founder("Lily", Some(false)),
        ])
        .unwrap()
    }

    #[test]
    fn new_table_is_zeroed_in_pedigree_order() {
        let table = ProbabilityTable::new(&pedigree());
        let names: Vec<&str> = table.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Harry", "James", "Lily"]);
        for entry in &table {
            assert_eq!(entry.gene.total(), 0.0);
            assert_eq!(entry.expression.total(), 0.0);
        }
    }

    #[test]
    fn update_adds_to_matching_buckets() {
        let pedigree = pedigree();
        let mut table = ProbabilityTable::new(&pedigree);
        let harry = PersonId::from("Harry");
        let james = PersonId::from("James");
        let lily = PersonId::from("Lily");
        let one = PersonSet::from([&harry]);
        let two = PersonSet::from([&james]);
        let have = PersonSet::from([&james]);

        table.update(&World::new(&one, &two, &have), 0.25);
        table.update(&World::new(&one, &two, &have), 0.25);

        let h = table.get(&harry).unwrap();
        assert_eq!(h.gene.get(GeneCount::One), 0.5);
        assert_eq!(h.gene.get(GeneCount::Zero), 0.0);
        assert_eq!(h.expression.get(false), 0.5);

        let j = table.get(&james).unwrap();
        assert_eq!(j.gene.two, 0.5);
        assert_eq!(j.expression.present, 0.5);

        let l = table.get(&lily).unwrap();
        assert_eq!(l.gene.zero, 0.5);
        assert_eq!(l.expression.absent, 0.5);
    }

    #[test]
    fn normalize_makes_distributions() {
        let pedigree = pedigree();
        let mut table = ProbabilityTable::new(&pedigree);
        let harry = PersonId::from("Harry");
        let none = PersonSet::new();
        let one = PersonSet::from([&harry]);

        table.update(&World::new(&none, &none, &none), 3.0);
        table.update(&World::new(&one, &none, &one), 1.0);

        assert_eq!(table.normalize(), 0);
        let h = table.get(&harry).unwrap();
        assert!((h.gene.zero - 0.75).abs() < 1e-12);
        assert!((h.gene.one - 0.25).abs() < 1e-12);
        assert!((h.expression.present - 0.25).abs() < 1e-12);
        for entry in &table {
            assert!((entry.gene.total() - 1.0).abs() < 1e-12);
            assert!((entry.expression.total() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn normalize_leaves_empty_totals_alone() {
        let mut table = ProbabilityTable::new(&pedigree());
        assert_eq!(table.normalize(), 6);
        for entry in &table {
            assert_eq!(entry.gene, GeneScores::default());
            assert_eq!(entry.expression, TraitScores::default());
        }
    }

    #[test]
    fn posterior_serializes_with_domain_keys() {
        let posterior = PersonPosterior {
            name: PersonId::from("Harry"),
            gene: GeneScores {
                zero: 0.5,
                one: 0.25,
                two: 0.25,
            },
            expression: TraitScores {
                present: 0.1,
                absent: 0.9,
            },
        };
        let json = serde_json::to_value(&posterior).unwrap();
        assert_eq!(json["name"], "Harry");
        assert_eq!(json["gene"]["2"], 0.25);
        assert_eq!(json["trait"]["true"], 0.1);
        assert_eq!(json["trait"]["false"], 0.9);
    }
}
