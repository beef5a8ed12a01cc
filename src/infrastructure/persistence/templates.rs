use crate::domain::entities::{Template, TemplateMetadata};
use crate::domain::ports::template_store::TemplateStore;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::Row;

#[async_trait]
impl TemplateStore for Database {
    async fn list_templates(&self, max_items: i64) -> ApiResult<Vec<TemplateMetadata>> {
        let rows = sqlx::query(
            "SELECT name, created_at
             FROM email_templates
             ORDER BY created_at DESC, name
             LIMIT ?",
        )
        .bind(max_items)
        .fetch_all(&self.pool)
        .await?;

        let mut templates = Vec::with_capacity(rows.len());
        for row in rows {
            templates.push(TemplateMetadata {
                name: row.try_get("name")?,
                created_at: row.try_get("created_at")?,
            });
        }

        Ok(templates)
    }

    async fn get_template(&self, name: &str) -> ApiResult<Option<Template>> {
        let row = sqlx::query(
            "SELECT name, html_part, subject_part, text_part
             FROM email_templates
             WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(Template {
                name: row.try_get("name")?,
                html_part: row.try_get("html_part")?,
                subject_part: row.try_get("subject_part")?,
                text_part: row.try_get("text_part")?,
            }))
        } else {
            Ok(None)
        }
    }

    async fn create_template(&self, template: &Template) -> ApiResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO email_templates (name, html_part, subject_part, text_part, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&template.name)
        .bind(&template.html_part)
        .bind(&template.subject_part)
        .bind(&template.text_part)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::Conflict(_) => {
                ApiError::Conflict(format!("Template {} already exists", template.name))
            }
            other => other,
        })?;

        tracing::info!("Template created: name={}", template.name);
        Ok(())
    }

    async fn update_template(&self, template: &Template) -> ApiResult<()> {
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            "UPDATE email_templates
             SET html_part = ?, subject_part = ?, text_part = ?, updated_at = ?
             WHERE name = ?",
        )
        .bind(&template.html_part)
        .bind(&template.subject_part)
        .bind(&template.text_part)
        .bind(&now)
        .bind(&template.name)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Template {} not found",
                template.name
            )));
        }

        tracing::info!("Template updated: name={}", template.name);
        Ok(())
    }

    async fn delete_template(&self, name: &str) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM email_templates WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Template {} not found", name)));
        }

        tracing::info!("Template deleted: name={}", name);
        Ok(())
    }
}
