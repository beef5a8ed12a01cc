pub mod placeholder_extractor;
pub mod template_transform;

pub use placeholder_extractor::{
    extract_dynamic_fields, extract_translation_keys, TemplatePlaceholders,
};
pub use template_transform::{
    extract_body_content, replace_translation_variables, wrap_with_document_structure,
    TemplateTransformer,
};
