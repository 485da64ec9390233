//! Inference engine modules.

pub mod engine;
pub mod joint;
pub mod table;
pub mod world;

pub use engine::{
    consistent_with_evidence, InferenceConfig, InferenceEngine, InferenceResult, InferenceStats,
    DEFAULT_MAX_INDIVIDUALS, MAX_ENUMERABLE_INDIVIDUALS,
};
pub use joint::{inheritance_probability, joint_probability};
pub use table::{GeneScores, PersonPosterior, ProbabilityTable, TraitScores};
pub use world::{PersonSet, World};
