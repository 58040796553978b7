//! Localized player-facing messages
//!
//! Templates are keyed by locale then message key, with `{0}`-style
//! positional placeholders. Unknown locales fall back to English.

use ahash::AHashMap;

/// Message key for the mitigation notice sent to attackers
pub const DAMAGE_REDUCED: &str = "DamageReduced";

const DEFAULT_LOCALE: &str = "en";

/// Per-locale message templates
#[derive(Debug, Default)]
pub struct MessageCatalog {
    locales: AHashMap<String, AHashMap<String, String>>,
}

impl MessageCatalog {
    /// Catalog preloaded with the English defaults.
    pub fn new() -> Self {
        let mut catalog = Self::default();
        catalog.register(
            DEFAULT_LOCALE,
            DAMAGE_REDUCED,
            "Your damage has been reduced by {0}% because the base owners are offline.",
        );
        catalog
    }

    pub fn register(&mut self, locale: &str, key: &str, template: &str) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), template.to_string());
    }

    /// Render a message, falling back to the bare key when no template is
    /// registered in any locale. Callers that must deliver something can
    /// rely on a non-empty result.
    pub fn render_or_key(&self, locale: &str, key: &str, args: &[String]) -> String {
        self.render(locale, key, args)
            .unwrap_or_else(|| key.to_string())
    }

    /// Render a message, substituting `{0}`, `{1}`, ... with `args` in order.
    pub fn render(&self, locale: &str, key: &str, args: &[String]) -> Option<String> {
        let template = self.lookup(locale, key)?;
        let mut message = template.to_string();
        for (index, arg) in args.iter().enumerate() {
            message = message.replace(&format!("{{{index}}}"), arg);
        }
        Some(message)
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|messages| messages.get(key))
            .or_else(|| {
                self.locales
                    .get(DEFAULT_LOCALE)
                    .and_then(|messages| messages.get(key))
            })
            .map(String::as_str)
    }
}
