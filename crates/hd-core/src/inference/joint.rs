//! Joint probability of a world.
//!
//! For each individual the probability of their genotype is taken from the
//! founder prior, or from what their parents pass on, and then multiplied by
//! the probability of their trait status given that genotype. The joint
//! probability is the product over the whole pedigree.

use hd_common::GeneCount;
use hd_config::GeneModel;

use super::world::World;
use crate::pedigree::{Individual, Pedigree};

/// Probability that every individual has exactly the genotype and trait
/// status `world` assigns them.
pub fn joint_probability(pedigree: &Pedigree, model: &GeneModel, world: &World<'_>) -> f64 {
    let mut p = 1.0;
    for person in pedigree {
        let genes = world.genes(&person.id);
        p *= genotype_probability(person, genes, model, world);
        p *= model.trait_probability(genes, world.has_trait(&person.id));
    }
    p
}

fn genotype_probability(
    person: &Individual,
    genes: GeneCount,
    model: &GeneModel,
    world: &World<'_>,
) -> f64 {
    match &person.parents {
        None => model.gene_prior(genes),
        Some(parents) => {
            let from_mother = model.transmission_probability(world.genes(&parents.mother));
            let from_father = model.transmission_probability(world.genes(&parents.father));
            inheritance_probability(genes, from_mother, from_father)
        }
    }
}

/// Probability that a child ends up with `genes` copies when the mother
/// passes the variant with probability `from_mother` and the father with
/// `from_father`.
pub fn inheritance_probability(genes: GeneCount, from_mother: f64, from_father: f64) -> f64 {
    match genes {
        GeneCount::Two => from_father * from_mother,
        GeneCount::One => from_mother * (1.0 - from_father) + from_father * (1.0 - from_mother),
        GeneCount::Zero => (1.0 - from_father) * (1.0 - from_mother),
    }
}
