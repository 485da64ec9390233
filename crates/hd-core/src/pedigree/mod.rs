//! Pedigree data model.
//!
//! A [`Pedigree`] is an ordered collection of [`Individual`]s keyed by
//! [`PersonId`]. Construction checks that labels are unique and that every
//! parent reference names someone in the same pedigree. The parent relation
//! is assumed to be acyclic; that is not checked.

pub mod source;

use std::collections::HashMap;

use hd_common::{Error, PersonId, Result};
use serde::{Deserialize, Serialize};

pub use source::{
    parse_csv, parse_json, CsvPedigreeSource, IndividualRecord, JsonPedigreeSource,
    PedigreeSource,
};

/// Both recorded parents of an individual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parents {
    pub mother: PersonId,
    pub father: PersonId,
}

/// One person in the pedigree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    pub id: PersonId,
    /// `None` for founders.
    pub parents: Option<Parents>,
    /// Observed trait status, `None` when unknown.
    pub observed_trait: Option<bool>,
}

impl Individual {
    pub fn founder(id: impl Into<PersonId>, observed_trait: Option<bool>) -> Self {
        Self {
            id: id.into(),
            parents: None,
            observed_trait,
        }
    }

    pub fn child(
        id: impl Into<PersonId>,
        mother: impl Into<PersonId>,
        father: impl Into<PersonId>,
        observed_trait: Option<bool>,
    ) -> Self {
        Self {
            id: id.into(),
            parents: Some(Parents {
                mother: mother.into(),
                father: father.into(),
            }),
            observed_trait,
        }
    }

    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }
}

/// Immutable set of individuals, in load order.
#[derive(Debug, Clone, Default)]
pub struct Pedigree {
    individuals: Vec<Individual>,
    index: HashMap<PersonId, usize>,
}

impl Pedigree {
    /// Build a pedigree, rejecting duplicate labels and dangling parents.
    pub fn new(individuals: Vec<Individual>) -> Result<Self> {
        let mut index = HashMap::with_capacity(individuals.len());
        for (pos, person) in individuals.iter().enumerate() {
            if index.insert(person.id.clone(), pos).is_some() {
                return Err(Error::DuplicateIndividual {
                    name: person.id.to_string(),
                });
            }
        }

        for person in &individuals {
            if let Some(parents) = &person.parents {
                for parent in [&parents.mother, &parents.father] {
                    if !index.contains_key(parent) {
                        return Err(Error::UnknownParent {
                            name: person.id.to_string(),
                            parent: parent.to_string(),
                        });
                    }
                }
            }
        }

        Ok(Self { individuals, index })
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn get(&self, id: &PersonId) -> Option<&Individual> {
        self.index.get(id).map(|&pos| &self.individuals[pos])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &PersonId> {
        self.individuals.iter().map(|p| &p.id)
    }

    /// Individuals whose trait status is known.
    pub fn observed(&self) -> impl Iterator<Item = (&PersonId, bool)> {
        self.individuals
            .iter()
            .filter_map(|p| p.observed_trait.map(|t| (&p.id, t)))
    }

    pub fn founders(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter().filter(|p| p.is_founder())
    }
}

impl<'a> IntoIterator for &'a Pedigree {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
