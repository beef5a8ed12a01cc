use serde::Serialize;

/// Language every template is authored in and auto-translation starts from.
pub const SOURCE_LANGUAGE: &str = "en";

/// A language an operator can maintain translations for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageDescriptor {
    pub code: &'static str,
    #[serde(rename = "name")]
    pub display_name: &'static str,
    #[serde(rename = "rtl")]
    pub is_rtl: bool,
    /// Code understood by the machine-translation provider
    #[serde(skip)]
    pub provider_code: &'static str,
}

impl LanguageDescriptor {
    const fn new(code: &'static str, display_name: &'static str, is_rtl: bool) -> Self {
        Self {
            code,
            display_name,
            is_rtl,
            provider_code: code,
        }
    }

    const fn with_provider_code(self, provider_code: &'static str) -> Self {
        Self {
            provider_code,
            ..self
        }
    }
}

const SUPPORTED_LANGUAGES: &[LanguageDescriptor] = &[
    LanguageDescriptor::new("en", "English", false),
    LanguageDescriptor::new("ar", "Arabic", true),
    LanguageDescriptor::new("ca", "Catalan", false),
    LanguageDescriptor::new("zh_Hans", "Chinese (Simplified)", false).with_provider_code("zh-CN"),
    LanguageDescriptor::new("zh_Hant", "Chinese (Traditional)", false).with_provider_code("zh-TW"),
    LanguageDescriptor::new("hr", "Croatian", false),
    LanguageDescriptor::new("cs", "Czech", false),
    LanguageDescriptor::new("da", "Danish", false),
    LanguageDescriptor::new("nl", "Dutch", false),
    LanguageDescriptor::new("fi", "Finnish", false),
    LanguageDescriptor::new("fr", "French", false),
    LanguageDescriptor::new("de", "German", false),
    LanguageDescriptor::new("el", "Greek", false),
    LanguageDescriptor::new("he", "Hebrew", true),
    LanguageDescriptor::new("hi", "Hindi", false),
    LanguageDescriptor::new("hu", "Hungarian", false),
    LanguageDescriptor::new("id", "Indonesian", false),
    LanguageDescriptor::new("it", "Italian", false),
    LanguageDescriptor::new("ja", "Japanese", false),
    LanguageDescriptor::new("ko", "Korean", false),
    LanguageDescriptor::new("ms", "Malay", false),
    LanguageDescriptor::new("no", "Norwegian", false),
    LanguageDescriptor::new("pl", "Polish", false),
    LanguageDescriptor::new("pt", "Portuguese", false),
    LanguageDescriptor::new("ro", "Romanian", false),
    LanguageDescriptor::new("ru", "Russian", false),
    LanguageDescriptor::new("sk", "Slovak", false),
    LanguageDescriptor::new("es", "Spanish", false),
    LanguageDescriptor::new("sv", "Swedish", false),
    LanguageDescriptor::new("th", "Thai", false),
    LanguageDescriptor::new("tr", "Turkish", false),
    LanguageDescriptor::new("uk", "Ukrainian", false),
    LanguageDescriptor::new("vi", "Vietnamese", false),
];

/// Immutable set of supported languages.
///
/// Built once at startup and shared (behind an `Arc`) by every component
/// that needs directionality or provider codes.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    languages: Vec<LanguageDescriptor>,
}

impl LanguageCatalog {
    pub fn new(languages: Vec<LanguageDescriptor>) -> Self {
        Self { languages }
    }

    pub fn languages(&self) -> &[LanguageDescriptor] {
        &self.languages
    }

    pub fn get(&self, code: &str) -> Option<&LanguageDescriptor> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Unknown codes are treated as left-to-right.
    pub fn is_rtl(&self, code: &str) -> bool {
        self.get(code).map(|lang| lang.is_rtl).unwrap_or(false)
    }

    /// Every language except the source language, in catalog order.
    pub fn translation_targets(&self) -> impl Iterator<Item = &LanguageDescriptor> {
        self.languages
            .iter()
            .filter(|lang| lang.code != SOURCE_LANGUAGE)
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::new(SUPPORTED_LANGUAGES.to_vec())
    }
}
