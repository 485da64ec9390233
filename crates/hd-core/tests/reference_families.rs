//! Posterior tables for the bundled sample families.
//!
//! Expected values are the four-decimal results of the reference model on
//! each fixture.

use std::path::PathBuf;

use hd_common::PersonId;
use hd_core::inference::{InferenceEngine, InferenceResult, PersonPosterior};
use hd_core::pedigree::{CsvPedigreeSource, JsonPedigreeSource, PedigreeSource};

const TOLERANCE: f64 = 5e-5;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(name: &str) -> InferenceResult {
    let pedigree = CsvPedigreeSource::new(fixture(name))
        .load()
        .expect("load fixture");
    InferenceEngine::default().infer(&pedigree).expect("infer")
}

fn person<'a>(result: &'a InferenceResult, name: &str) -> &'a PersonPosterior {
    result
        .table
        .get(&PersonId::from(name))
        .unwrap_or_else(|| panic!("{name} missing from table"))
}

/// Check `[two, one, zero]` gene probabilities and P(trait).
fn check(result: &InferenceResult, name: &str, gene: [f64; 3], has_trait: f64) {
    let p = person(result, name);
    let actual = [p.gene.two, p.gene.one, p.gene.zero];
    for (a, e) in actual.iter().zip(gene) {
        assert!(
            (a - e).abs() <= TOLERANCE,
            "{name}: gene {actual:?} expected {gene:?}"
        );
    }
    assert!(
        (p.expression.present - has_trait).abs() <= TOLERANCE,
        "{name}: trait {} expected {has_trait}",
        p.expression.present
    );
    assert!((p.expression.present + p.expression.absent - 1.0).abs() < 1e-9);
}

#[test]
fn family0_posteriors() {
    let result = run("family0.csv");
    check(&result, "Harry", [0.0092, 0.4557, 0.5351], 0.2665);
    check(&result, "James", [0.1976, 0.5106, 0.2918], 1.0);
    check(&result, "Lily", [0.0036, 0.0136, 0.9827], 0.0);
}

#[test]
fn family1_posteriors() {
    let result = run("family1.csv");
    check(&result, "Arthur", [0.0329, 0.1035, 0.8636], 0.0);
    check(&result, "Charlie", [0.0018, 0.1331, 0.8651], 0.0);
    check(&result, "Fred", [0.0065, 0.6486, 0.3449], 1.0);
    check(&result, "Ginny", [0.0027, 0.1805, 0.8168], 0.1110);
    check(&result, "Molly", [0.0329, 0.1035, 0.8636], 0.0);
    check(&result, "Ron", [0.0027, 0.1805, 0.8168], 0.1110);
}

#[test]
fn family2_posteriors() {
    let result = run("family2.csv");
    check(&result, "Arthur", [0.0147, 0.0344, 0.9509], 0.0);
    check(&result, "Hermione", [0.0608, 0.1203, 0.8189], 0.0);
    check(&result, "Molly", [0.0404, 0.0744, 0.8852], 0.0768);
    check(&result, "Ron", [0.0043, 0.2149, 0.7808], 0.0);
    check(&result, "Rose", [0.0088, 0.7022, 0.2890], 1.0);
}

#[test]
fn output_follows_file_order() {
    let result = run("family1.csv");
    let names: Vec<&str> = result.table.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Arthur", "Charlie", "Fred", "Ginny", "Molly", "Ron"]);
}

#[test]
fn json_and_csv_agree() {
    let from_csv = run("family0.csv");
    let pedigree = JsonPedigreeSource::new(fixture("family0.json"))
        .load()
        .expect("load json fixture");
    let from_json = InferenceEngine::default().infer(&pedigree).expect("infer");
    assert_eq!(from_csv.table, from_json.table);
}
