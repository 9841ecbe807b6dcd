mod common;

use std::fs;

use clause_core::config::EngineConfig;
use clause_core::document::{load_text_documents, DocumentId, LoadError, NamingConvention};
use clause_core::pipeline::Pipeline;
use clause_core::report::{self, SummaryReport};
use clause_core::types::Classification;
use serde_json::Value;
use tempfile::tempdir;

use common::*;

#[test]
fn text_files_to_results_on_disk() {
    let dir = tempdir().unwrap();
    let contracts = dir.path().join("Contracts");
    let templates = dir.path().join("Standard Templates");
    fs::create_dir(&contracts).unwrap();
    fs::create_dir(&templates).unwrap();

    // Line breaks as left behind by text extraction.
    fs::write(
        templates.join("TN_Standard_Template.txt"),
        format!("{TN_FILING}\n{TN_FEES}\n\n{TN_NETWORKS}\n"),
    )
    .unwrap();
    fs::write(
        contracts.join("TN_Contract1.txt"),
        format!("{TN_FILING}\n{TN_FEES}\n{TN_NETWORKS}"),
    )
    .unwrap();
    fs::write(
        contracts.join("TN_Contract2.txt"),
        format!("{FILING_NINETY_DAYS}\n{FEES_NINETY_FIVE}\n{NETWORKS_EXCEPT_FOR}"),
    )
    .unwrap();
    fs::write(contracts.join("WA_Contract1.txt"), TN_FILING).unwrap();
    fs::write(contracts.join("TN_Contract9.pdf"), b"%PDF-1.7").unwrap();

    let naming = NamingConvention::default();
    let mut documents = load_text_documents(&contracts, &naming).unwrap();
    documents.extend(load_text_documents(&templates, &naming).unwrap());
    assert_eq!(documents.len(), 4, "pdf files are not read");

    let pipeline = Pipeline::new(EngineConfig {
        attributes: test_attributes(),
        ..EngineConfig::default()
    })
    .unwrap();
    let run = pipeline.run(&documents).unwrap();

    let results_path = dir.path().join("out/classification_results.json");
    report::write_results(&run, &results_path).unwrap();
    assert!(!dir.path().join("out/classification_results.json.tmp").exists());

    let loaded = report::read_results(&results_path).unwrap();
    assert_eq!(loaded, run.documents);
    let contract2 = &loaded[&DocumentId::new("TN_Contract2").unwrap()];
    assert_eq!(
        contract2.attributes["Medicaid Timely Filing"].classification,
        Some(Classification::NonStandard)
    );

    let summary = run.summary();
    assert_eq!(summary.total_contracts_processed, 2);
    assert_eq!(summary.skipped_contracts.len(), 1);

    let summary_path = dir.path().join("summary.json");
    report::write_summary(&SummaryReport::new(summary.clone()), &summary_path).unwrap();
    let value: Value = serde_json::from_str(&fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert!(value["generated_at"].is_string());
    assert_eq!(value["total_contracts_processed"], 2);
    assert_eq!(value["classification_totals"]["Non-Standard"], 2);
    assert_eq!(value["non_standard_contracts"][0], "TN_Contract2");

    let reread: SummaryReport = serde_json::from_value(value).unwrap();
    assert_eq!(reread.metrics, summary);

    let text = report::render_summary(&summary);
    assert!(text.contains("Total Contracts Processed: 2"));
    assert!(text.contains("-> Standard: 4"));
    assert!(text.contains("-> Non-Standard: 2"));
    assert!(text.contains("-> WA_Contract1 (WA)"));
}

#[test]
fn rewriting_results_replaces_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("classification_results.json");
    let pipeline = Pipeline::new(EngineConfig {
        attributes: test_attributes(),
        ..EngineConfig::default()
    })
    .unwrap();

    let first = pipeline.run(&corpus()).unwrap();
    report::write_results(&first, &path).unwrap();

    let second = pipeline
        .run(&[make_doc("TN_Template", TN_FILING), make_doc("TN_Contract1", TN_FILING)])
        .unwrap();
    report::write_results(&second, &path).unwrap();

    assert_eq!(report::read_results(&path).unwrap().len(), 2);
}

#[test]
fn invalid_utf8_file_is_reported_with_its_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("TN_Contract1.txt"), [0u8, 159, 146, 150]).unwrap();

    match load_text_documents(dir.path(), &NamingConvention::default()) {
        Err(LoadError::Document { path, .. }) => assert!(path.ends_with("TN_Contract1.txt")),
        other => panic!("expected a document error, got {other:?}"),
    }
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempdir().unwrap();
    let result = load_text_documents(&dir.path().join("nope"), &NamingConvention::default());
    assert!(matches!(result, Err(LoadError::Io { .. })));
}
