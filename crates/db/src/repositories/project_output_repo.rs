//! Repository for the `project_outputs` table.
//!
//! A project has at most one live output row, so writes go through a keyed
//! upsert on `project_id` rather than separate insert/update paths.

use sqlx::PgPool;

use planforge_core::plan::PlanContent;
use planforge_core::types::DbId;

use crate::models::project_output::ProjectOutput;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, market_analysis, swot, personas, customer_journey, \
    value_proposition, business_model, marketing_strategy, pricing, financial_projection, \
    pitch, sales_script, created_at, updated_at";

/// Provides read and upsert operations for live generated outputs.
pub struct ProjectOutputRepo;

impl ProjectOutputRepo {
    /// Find the live output for a project, if any has been generated.
    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<ProjectOutput>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_outputs WHERE project_id = $1");
        sqlx::query_as::<_, ProjectOutput>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or overwrite the live output for a project.
    ///
    /// All content columns are replaced wholesale; the generation pipeline
    /// and the restore workflow both deliver complete `PlanContent` values.
    pub async fn upsert(
        pool: &PgPool,
        project_id: DbId,
        content: &PlanContent,
    ) -> Result<ProjectOutput, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_outputs
                (project_id, market_analysis, swot, personas, customer_journey,
                 value_proposition, business_model, marketing_strategy, pricing,
                 financial_projection, pitch, sales_script)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             ON CONFLICT (project_id) DO UPDATE SET
                market_analysis = EXCLUDED.market_analysis,
                swot = EXCLUDED.swot,
                personas = EXCLUDED.personas,
                customer_journey = EXCLUDED.customer_journey,
                value_proposition = EXCLUDED.value_proposition,
                business_model = EXCLUDED.business_model,
                marketing_strategy = EXCLUDED.marketing_strategy,
                pricing = EXCLUDED.pricing,
                financial_projection = EXCLUDED.financial_projection,
                pitch = EXCLUDED.pitch,
                sales_script = EXCLUDED.sales_script,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectOutput>(&query)
            .bind(project_id)
            .bind(&content.market_analysis)
            .bind(&content.swot)
            .bind(&content.personas)
            .bind(&content.customer_journey)
            .bind(&content.value_proposition)
            .bind(&content.business_model)
            .bind(&content.marketing_strategy)
            .bind(&content.pricing)
            .bind(&content.financial_projection)
            .bind(&content.pitch)
            .bind(&content.sales_script)
            .fetch_one(pool)
            .await
    }
}
