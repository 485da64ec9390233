//! Exact inference by enumeration.
//!
//! Every world is visited exactly once:
//! - each subset of individuals is tried as the set showing the trait, and
//!   subsets that contradict an observed trait are skipped;
//! - each subset is tried as the one-copy set;
//! - each subset of the remaining individuals is tried as the two-copy set.
//!
//! The joint probability of every visited world is accumulated into a
//! [`ProbabilityTable`], which is normalized at the end. The work grows as
//! `2^n * 3^n` in the number of individuals, so the engine refuses pedigrees
//! above [`InferenceConfig::max_individuals`], which itself may not exceed
//! [`MAX_ENUMERABLE_INDIVIDUALS`].

use std::time::Instant;

use hd_common::{Error, PersonId, Result, RunId};
use hd_config::GeneModel;
use hd_math::{complement, power_set, subsets};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::joint::joint_probability;
use super::table::ProbabilityTable;
use super::world::{PersonSet, World};
use crate::pedigree::Pedigree;

/// Default ceiling on pedigree size.
pub const DEFAULT_MAX_INDIVIDUALS: usize = 12;

/// Hard ceiling on [`InferenceConfig::max_individuals`].
///
/// The subset list for the trait and one-copy loops is held in memory, and
/// it doubles with every individual.
pub const MAX_ENUMERABLE_INDIVIDUALS: usize = 20;

/// Configuration for the inference driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Largest pedigree the engine will enumerate.
    pub max_individuals: usize,
}

impl InferenceConfig {
    /// Reject ceilings the enumerator cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.max_individuals > MAX_ENUMERABLE_INDIVIDUALS {
            return Err(Error::Inference(format!(
                "max_individuals {} exceeds the enumerable limit of {}",
                self.max_individuals, MAX_ENUMERABLE_INDIVIDUALS
            )));
        }
        Ok(())
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_individuals: DEFAULT_MAX_INDIVIDUALS,
        }
    }
}

/// Counters collected during one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InferenceStats {
    pub individuals: usize,
    /// Candidate trait sets, accepted or not.
    pub trait_sets_considered: u64,
    /// Trait sets that contradicted an observation.
    pub trait_sets_rejected: u64,
    pub worlds_evaluated: u64,
    /// Total probability of all worlds consistent with the observations.
    pub evidence_likelihood: f64,
}

/// Output of one inference run.
#[derive(Debug, Clone)]
pub struct InferenceResult {
    pub run_id: RunId,
    pub table: ProbabilityTable,
    pub stats: InferenceStats,
}

/// Exact enumerator over a fixed model.
#[derive(Debug, Clone, Default)]
pub struct InferenceEngine {
    model: GeneModel,
    config: InferenceConfig,
}

impl InferenceEngine {
    pub fn new(model: GeneModel, config: InferenceConfig) -> Self {
        Self { model, config }
    }

    pub fn model(&self) -> &GeneModel {
        &self.model
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Compute every individual's posterior gene and trait distributions.
    pub fn infer(&self, pedigree: &Pedigree) -> Result<InferenceResult> {
        self.config.validate()?;
        let max = self.config.max_individuals;
        if pedigree.len() > max {
            return Err(Error::PedigreeTooLarge {
                count: pedigree.len(),
                max,
            });
        }

        let run_id = RunId::new();
        let started = Instant::now();
        info!(
            run_id = %run_id,
            individuals = pedigree.len(),
            founders = pedigree.founders().count(),
            observed = pedigree.observed().count(),
            "starting exact inference"
        );

        let mut table = ProbabilityTable::new(pedigree);
        let mut stats = InferenceStats {
            individuals: pedigree.len(),
            ..InferenceStats::default()
        };

        let ids: Vec<&PersonId> = pedigree.ids().collect();
        let all_subsets = power_set(&ids);

        for have_trait in &all_subsets {
            stats.trait_sets_considered += 1;
            if !consistent_with_evidence(pedigree, have_trait) {
                stats.trait_sets_rejected += 1;
                trace!(size = have_trait.len(), "trait set contradicts observations");
                continue;
            }

            for one_gene in &all_subsets {
                let remaining = complement(&ids, one_gene);
                for two_genes in subsets(&remaining) {
                    let world = World::new(one_gene, &two_genes, have_trait);
                    let p = joint_probability(pedigree, &self.model, &world);
                    table.update(&world, p);
                    stats.evidence_likelihood += p;
                    stats.worlds_evaluated += 1;
                }
            }
        }

        let skipped = table.normalize();
        if skipped > 0 {
            debug!(skipped, "some distributions had no probability mass");
        }

        info!(
            run_id = %run_id,
            worlds = stats.worlds_evaluated,
            rejected_trait_sets = stats.trait_sets_rejected,
            evidence_likelihood = stats.evidence_likelihood,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "inference complete"
        );

        Ok(InferenceResult {
            run_id,
            table,
            stats,
        })
    }
}

/// Whether `have_trait` agrees with every observed trait in the pedigree.
pub fn consistent_with_evidence(pedigree: &Pedigree, have_trait: &PersonSet<'_>) -> bool {
    pedigree
        .observed()
        .all(|(id, observed)| have_trait.contains(id) == observed)
}
