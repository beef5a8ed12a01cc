use crate::domain::entities::TranslationSet;
use crate::domain::ports::translation_repository::TranslationRepository;
use crate::infrastructure::http::middleware::error::ApiResult;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::Row;

#[async_trait]
impl TranslationRepository for Database {
    async fn get_translations(
        &self,
        template_name: &str,
        language: &str,
    ) -> ApiResult<Option<TranslationSet>> {
        let row = sqlx::query(
            "SELECT translations
             FROM template_translations
             WHERE template_name = ? AND language = ?",
        )
        .bind(template_name)
        .bind(language)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let raw: String = row.try_get("translations")?;
                Ok(Some(serde_json::from_str(&raw)?))
            }
            None => Ok(None),
        }
    }

    async fn put_translations(
        &self,
        template_name: &str,
        language: &str,
        translations: &TranslationSet,
    ) -> ApiResult<()> {
        let payload = serde_json::to_string(translations)?;
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO template_translations (template_name, language, translations, updated_at)
             VALUES (?, ?, ?, ?)
             ON CONFLICT (template_name, language)
             DO UPDATE SET translations = excluded.translations, updated_at = excluded.updated_at",
        )
        .bind(template_name)
        .bind(language)
        .bind(&payload)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        tracing::debug!(
            "Translations stored: template={}, language={}",
            template_name,
            language
        );
        Ok(())
    }

    async fn list_languages(&self, template_name: &str) -> ApiResult<Vec<String>> {
        let rows = sqlx::query(
            "SELECT language
             FROM template_translations
             WHERE template_name = ?
             ORDER BY language",
        )
        .bind(template_name)
        .fetch_all(&self.pool)
        .await?;

        let mut languages = Vec::with_capacity(rows.len());
        for row in rows {
            languages.push(row.try_get("language")?);
        }

        Ok(languages)
    }

    async fn delete_translations(&self, template_name: &str, language: &str) -> ApiResult<()> {
        sqlx::query("DELETE FROM template_translations WHERE template_name = ? AND language = ?")
            .bind(template_name)
            .bind(language)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            "Translations deleted: template={}, language={}",
            template_name,
            language
        );
        Ok(())
    }
}
