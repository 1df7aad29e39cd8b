//! Fluent resource loading.

use std::path::Path;

use fluent::{FluentBundle, FluentResource};

use super::Language;

/// Parse FTL source into a Fluent resource.
pub fn parse_resource(source: String) -> Result<FluentResource, TranslationLoadError> {
    FluentResource::try_new(source).map_err(|(_, errors)| {
        TranslationLoadError::ParseError(
            errors
                .iter()
                .map(|e| format!("{:?}", e))
                .collect::<Vec<_>>()
                .join("; "),
        )
    })
}

/// Build a bundle for a language from FTL source.
pub fn build_bundle(
    language: Language,
    source: &str,
) -> Result<FluentBundle<FluentResource>, TranslationLoadError> {
    let resource = parse_resource(source.to_string())?;

    let mut bundle = FluentBundle::new(vec![language.langid()]);
    // Terminal output has no bidi handling; isolation marks would show up as noise.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| TranslationLoadError::ParseError(format!("{:?}", errors)))?;

    Ok(bundle)
}

/// Read a single .ftl file into a Fluent resource.
pub fn load_file(path: &Path) -> Result<FluentResource, TranslationLoadError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| TranslationLoadError::IoError(e.to_string()))?;
    parse_resource(content)
}

/// Errors that can occur when loading translations.
#[derive(Debug, thiserror::Error)]
pub enum TranslationLoadError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
