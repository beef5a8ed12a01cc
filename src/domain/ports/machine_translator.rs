use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("Translation request failed: {0}")]
    Request(String),
    #[error("Translation provider returned HTTP {status}: {message}")]
    Provider { status: u16, message: String },
    #[error("Translation provider returned no translation")]
    EmptyResponse,
}

/// External machine-translation provider
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translates `text` between provider language codes
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslatorError>;

    /// Provider name for logging
    fn provider_name(&self) -> &'static str;
}
