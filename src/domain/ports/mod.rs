pub mod machine_translator;
pub mod template_store;
pub mod translation_repository;
