#![allow(dead_code)]

use clause_core::document::{
    AttributeDefinition, AttributeSet, Document, DocumentId, NamingConvention,
};

pub const TN_FILING: &str = "Provider shall submit Claims within one hundred twenty (120) days from the date the Health Services are rendered.";
pub const TN_FEES: &str = "Payment shall be one hundred percent (100%) of the Professional Provider Fee Schedule in effect on the date of service.";
pub const TN_NETWORKS: &str = "Provider shall be recognized as a Participating Provider in designated Networks.";

pub const FILING_NINETY_DAYS: &str = "Provider shall submit Claims within ninety (90) days from the date the Health Services are rendered.";
pub const FEES_NINETY_FIVE: &str = "Payment shall be ninety-five percent (95%) of the Professional Provider Fee Schedule in effect on the date of service.";
pub const NETWORKS_EXCEPT_FOR: &str = "Provider shall be recognized as a Participating Provider in designated Networks except for behavioral health Networks.";

pub fn make_doc(id: &str, text: &str) -> Document {
    Document::from_text(
        DocumentId::new(id).unwrap(),
        text,
        &NamingConvention::default(),
    )
}

pub fn test_attributes() -> AttributeSet {
    AttributeSet::new(vec![
        AttributeDefinition::new(
            "Medicaid Timely Filing",
            "Submission of Claims",
            &["submit Claims"],
            "Fallback filing wording.",
        ),
        AttributeDefinition::new(
            "Medicaid Fee Schedule",
            "Reimbursement",
            &["Fee Schedule"],
            "Fallback fee wording.",
        ),
        AttributeDefinition::new(
            "No Steerage/SOC",
            "Networks",
            &["Participating Provider"],
            "Fallback network wording.",
        ),
    ])
    .unwrap()
}

pub fn join(sentences: &[&str]) -> String {
    sentences.join(" ")
}

/// Two jurisdictions with templates (TN complete, KY missing the network
/// clause) and one without (GA).
pub fn corpus() -> Vec<Document> {
    vec![
        make_doc("TN_Standard_Template", &join(&[TN_FILING, TN_FEES, TN_NETWORKS])),
        make_doc("KY_Standard_Template", &join(&[TN_FILING, TN_FEES])),
        make_doc("TN_Contract1", &join(&[TN_FILING, TN_FEES, TN_NETWORKS])),
        make_doc(
            "TN_Contract2",
            &join(&[FILING_NINETY_DAYS, FEES_NINETY_FIVE, NETWORKS_EXCEPT_FOR]),
        ),
        make_doc("TN_Contract3", &join(&[TN_FILING, TN_NETWORKS])),
        make_doc("KY_Contract1", &join(&[TN_FILING, TN_FEES, TN_NETWORKS])),
        make_doc("GA_Contract1", &join(&[TN_FILING, TN_FEES, TN_NETWORKS])),
    ]
}
