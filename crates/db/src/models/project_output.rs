//! Live generated-output model.
//!
//! A project has at most one live `project_outputs` row; the generation
//! pipeline and the restore workflow both write it through a keyed upsert.

use serde::Serialize;
use sqlx::FromRow;

use planforge_core::plan::PlanContent;
use planforge_core::types::{DbId, Timestamp};

/// A generated-plan row from the `project_outputs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectOutput {
    pub id: DbId,
    pub project_id: DbId,
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
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectOutput {
    /// Extract the plan content sections, leaving row identity behind.
    pub fn content(&self) -> PlanContent {
        PlanContent {
            market_analysis: self.market_analysis.clone(),
            swot: self.swot.clone(),
            personas: self.personas.clone(),
            customer_journey: self.customer_journey.clone(),
            value_proposition: self.value_proposition.clone(),
            business_model: self.business_model.clone(),
            marketing_strategy: self.marketing_strategy.clone(),
            pricing: self.pricing.clone(),
            financial_projection: self.financial_projection.clone(),
            pitch: self.pitch.clone(),
            sales_script: self.sales_script.clone(),
        }
    }
}
