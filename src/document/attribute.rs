use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttributeError {
    #[error("At least one attribute must be configured")]
    Empty,
    #[error("Attribute at position {0} has a blank name")]
    BlankName(usize),
    #[error("Duplicate attribute name: {0}")]
    DuplicateName(String),
    #[error("Attribute {0} has no keywords")]
    NoKeywords(String),
    #[error("Attribute {0} has a blank keyword")]
    BlankKeyword(String),
}

/// A named clause type to extract and classify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub name: String,
    /// Contract section the clause usually sits in. Documentation only.
    #[serde(default)]
    pub section_context: String,
    /// Phrases matched case-insensitively against each sentence, in order.
    pub keywords: Vec<String>,
    /// Reference text used when no jurisdiction template supplies one.
    pub standard_wording: String,
}

impl AttributeDefinition {
    pub fn new(
        name: impl Into<String>,
        section_context: impl Into<String>,
        keywords: &[&str],
        standard_wording: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            section_context: section_context.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            standard_wording: standard_wording.into(),
        }
    }
}

/// Ordered attribute definitions, validated once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeSet {
    attributes: Vec<AttributeDefinition>,
}

impl AttributeSet {
    pub fn new(attributes: Vec<AttributeDefinition>) -> Result<Self, AttributeError> {
        if attributes.is_empty() {
            return Err(AttributeError::Empty);
        }

        let mut seen = BTreeSet::new();
        for (position, attr) in attributes.iter().enumerate() {
            if attr.name.trim().is_empty() {
                return Err(AttributeError::BlankName(position));
            }
            if !seen.insert(attr.name.as_str()) {
                return Err(AttributeError::DuplicateName(attr.name.clone()));
            }
            if attr.keywords.is_empty() {
                return Err(AttributeError::NoKeywords(attr.name.clone()));
            }
            if attr.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(AttributeError::BlankKeyword(attr.name.clone()));
            }
        }

        Ok(Self { attributes })
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeDefinition> {
        self.attributes.iter()
    }

    pub fn get(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<'de> Deserialize<'de> for AttributeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let attributes = Vec::<AttributeDefinition>::deserialize(deserializer)?;
        AttributeSet::new(attributes).map_err(serde::de::Error::custom)
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            attributes: builtin_attributes(),
        }
    }
}

/// The five provider-agreement clauses the engine ships with.
pub fn builtin_attributes() -> Vec<AttributeDefinition> {
    vec![
        AttributeDefinition::new(
            "Medicaid Timely Filing",
            "Submission and Adjudication of Medicaid Claims",
            &[
                "shall submit Claims",
                "Claims to using appropriate",
                "one hundred twenty (120) days",
            ],
            "Unless otherwise instructed, or required by Regulatory Requirements, Provider shall submit Claims to using appropriate and current Coded Service Identifier(s), within one hundred twenty (120) days from the date the Health Services are rendered or may refuse payment. If is the secondary payor, the one hundred twenty (120) day period will not begin until Provider receives notification of primary payor's responsibility.",
        ),
        AttributeDefinition::new(
            "Medicare Timely Filing",
            "Submission and Adjudication of Medicare Advantage Claims",
            &[
                "shall submit Claims to",
                "Coded Service Identifier",
                "ninety (90) days from the date",
            ],
            "Unless otherwise instructed in the provider manual(s) or Policies applicable to Medicare Advantage Program, or unless required by Regulatory Requirements, Provider shall submit Claims to using appropriate and current Coded Service Identifier(s), within ninety (90) days from the date the Health Services are rendered or will refuse payment. If is the secondary payor, the ninety (90) day period will not begin until Provider receives notification of primary payor's responsibility.",
        ),
        AttributeDefinition::new(
            "No Steerage/SOC",
            "Networks and Provider Panels",
            &[
                "eligible to participate only in those Networks",
                "Participating Provider",
                "discontinue, or modify new or existing Networks",
            ],
            "Provider shall be eligible to participate only in those Networks designated on the Provider Networks Attachment of this Agreement. Provider shall not be recognized as a Participating Provider in such Networks until the later of: 1) the Effective Date of this Agreement or; 2) as determined by in its sole discretion, the date Provider has met applicable credentialing requirements and accreditation requirements. Provider acknowledges that may develop,discontinue, or modify new or existing Networks, products and/or programs. In addition to those Networks designated on the Provider Networks Attachment, may also identify Provider as a Participating Provider in additional Networks, products and/or programs designated in writing from time to time by The terms and conditions of Provider's participation as a Participating Provider in such additional Networks, products and/or programs shall be on the terms and conditions as set forth in thisAgreement unless otherwise agreed to in writing by Provider and",
        ),
        AttributeDefinition::new(
            "Medicaid Fee Schedule",
            "Specific Reimbursement Terms",
            &[
                "total reimbursement amount",
                "one hundred percent (100%)",
                "Fee Schedule A",
            ],
            "For purposes of determining the █████ Rate, the total reimbursement amount that Provider and █████ have agreed upon for the applicable provider type(s) for Covered Services provided under this Agreement shall be one hundred percent (100%) of the █████ Professional Provider Market Master Fee Schedule A in effect on the date of service.",
        ),
        AttributeDefinition::new(
            "Medicare Fee Schedule",
            "Specific Reimbursement Terms",
            &[
                "Covered Services furnished",
                "Medicare Advantage Network",
                "lesser of Eligible Charges or the Medicare Advantage Rate",
            ],
            "For Covered Services furnished by or on behalf of Provider for a Member enrolled in a Medicare Advantage Network, Provider agrees to accept an amount that is the lesser of Eligible Charges or the Medicare Advantage Rate, minus applicable Cost Shares, and modified before payment as described below. Provider agrees that this amount, plus applicable Cost Shares, is full compensation for Covered Services.",
        ),
    ]
}
