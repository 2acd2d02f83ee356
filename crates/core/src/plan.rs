//! Generated business-plan content.
//!
//! The plan generator is an external collaborator with no contractual output
//! schema; the structured sections (`swot`, `personas`, `financial_projection`)
//! are kept as free-form JSON rather than rigid structs so an upstream shape
//! change cannot break snapshotting or restore.

use serde::{Deserialize, Serialize};

/// The content sections of a generated business plan.
///
/// Every field is optional: the generator is not guaranteed to produce all
/// sections, and partial output is stored as-is without validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanContent {
    pub market_analysis: Option<String>,
    pub swot: Option<serde_json::Value>,
    pub personas: Option<serde_json::Value>,
    pub customer_journey: Option<String>,
    pub value_proposition: Option<String>,
    pub business_model: Option<String>,
    pub marketing_strategy: Option<String>,
    pub pricing: Option<String>,
    pub financial_projection: Option<serde_json::Value>,
    pub pitch: Option<String>,
    pub sales_script: Option<String>,
}

impl PlanContent {
    /// Serialize to a JSON value for embedding in a version record.
    ///
    /// Infallible: every section is a string or already-parsed JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "market_analysis": self.market_analysis,
            "swot": self.swot,
            "personas": self.personas,
            "customer_journey": self.customer_journey,
            "value_proposition": self.value_proposition,
            "business_model": self.business_model,
            "marketing_strategy": self.marketing_strategy,
            "pricing": self.pricing,
            "financial_projection": self.financial_projection,
            "pitch": self.pitch,
            "sales_script": self.sales_script,
        })
    }

    /// An entirely empty plan (no sections generated yet).
    pub fn empty() -> Self {
        Self {
            market_analysis: None,
            swot: None,
            personas: None,
            customer_journey: None,
            value_proposition: None,
            business_model: None,
            marketing_strategy: None,
            pricing: None,
            financial_projection: None,
            pitch: None,
            sales_script: None,
        }
    }
}
