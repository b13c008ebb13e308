use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use std::sync::LazyLock;
use tracing::warn;
use unic_langid::{langid, LanguageIdentifier};

const EN_MESSAGES: &str = include_str!("../locales/en/main.ftl");

/// Localization manager for the Free Food Bot
pub struct LocalizationManager {
    bundle: FluentBundle<FluentResource>,
}

impl LocalizationManager {
    /// Create a manager with the bundled English messages
    pub fn new() -> Self {
        Self::from_source(langid!("en"), EN_MESSAGES)
    }

    /// Create a manager from Fluent source text
    ///
    /// Entries that fail to parse are dropped; the rest stay usable.
    pub fn from_source(locale: LanguageIdentifier, source: &str) -> Self {
        let mut bundle = FluentBundle::new_concurrent(vec![locale]);
        bundle.set_use_isolating(false);

        let resource = match FluentResource::try_new(source.to_string()) {
            Ok(resource) => resource,
            Err((resource, errors)) => {
                warn!(error_count = errors.len(), "Fluent resource contains parse errors");
                resource
            }
        };

        if let Err(errors) = bundle.add_resource(resource) {
            warn!(error_count = errors.len(), "Duplicate Fluent message ids ignored");
        }

        Self { bundle }
    }

    /// Get a localized message
    pub fn get_message(&self, key: &str) -> String {
        let msg = match self.bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {}", key),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {}", key),
        };

        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            warn!(key = %key, error_count = errors.len(), "Errors while formatting message");
        }

        value.into_owned()
    }
}

impl Default for LocalizationManager {
    fn default() -> Self {
        Self::new()
    }
}

static LOCALIZATION_MANAGER: LazyLock<LocalizationManager> = LazyLock::new(LocalizationManager::new);

/// Convenience function to get a localized message
pub fn t(key: &str) -> String {
    LOCALIZATION_MANAGER.get_message(key)
}
