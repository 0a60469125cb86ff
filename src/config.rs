use crate::voting::TextSnippet;

pub const APP_TITLE: &str = "AI Text Verifier & Voter";

/// Environment variables holding the identity provider's application and
/// action identifiers. Placeholders are used when unset so the rest of the
/// application stays usable without a developer-portal registration.
pub const APP_ID_ENV_VAR: &str = "WLD_APP_ID";
pub const ACTION_ID_ENV_VAR: &str = "WLD_ACTION_ID";
pub const APP_ID_PLACEHOLDER: &str = "app_YOUR_APP_ID_HERE";
pub const ACTION_ID_PLACEHOLDER: &str = "action_YOUR_ACTION_ID_HERE";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub app_id: String,
    pub action_id: String,
    /// Bounded wait for the external identity widget to finish initializing.
    /// After this the widget is treated as unavailable.
    pub widget_init_wait: std::time::Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_id: APP_ID_PLACEHOLDER.to_string(),
            action_id: ACTION_ID_PLACEHOLDER.to_string(),
            widget_init_wait: std::time::Duration::from_secs(3),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Default::default()
    }

    /// Load identifiers from the process environment, falling back to .env,
    /// falling back to placeholders.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let app_id = match dotenvy::var(APP_ID_ENV_VAR) {
            Ok(app_id) => app_id,
            Err(_) => {
                crate::trace!("{} not set, using placeholder", APP_ID_ENV_VAR);
                APP_ID_PLACEHOLDER.to_string()
            }
        };
        let action_id = match dotenvy::var(ACTION_ID_ENV_VAR) {
            Ok(action_id) => action_id,
            Err(_) => {
                crate::trace!("{} not set, using placeholder", ACTION_ID_ENV_VAR);
                ACTION_ID_PLACEHOLDER.to_string()
            }
        };

        Self {
            app_id,
            action_id,
            ..Default::default()
        }
    }

    pub fn with_widget_init_wait(mut self, wait: std::time::Duration) -> Self {
        self.widget_init_wait = wait;
        self
    }
}

/// Static samples shown for voting. Read-only seed data.
pub fn sample_snippets() -> Vec<TextSnippet> {
    vec![
        TextSnippet::new(
            "sample1",
            "The quick brown fox jumps over the lazy dog. This sentence is a classic pangram, \
             containing all letters of the English alphabet. It's often used for testing \
             typefaces and keyboard layouts.",
        ),
        TextSnippet::new(
            "sample2",
            "Recent advancements in neural networks have led to breakthroughs in natural \
             language processing. Models can now generate remarkably coherent and contextually \
             relevant text, blurring the lines between human and machine-authored content.",
        ),
        TextSnippet::new(
            "sample3",
            "I went to the store this morning to buy some milk and eggs. The weather was \
             surprisingly pleasant for this time of year, a bit chilly but sunny. The cashier \
             was friendly and wished me a good day.",
        ),
        TextSnippet::new(
            "sample4",
            "To be, or not to be, that is the question: Whether 'tis nobler in the mind to \
             suffer The slings and arrows of outrageous fortune, Or to take Arms against a Sea \
             of troubles, And by opposing end them: to die, to sleep.",
        ),
        TextSnippet::new(
            "sample5",
            "Our quarterly earnings report indicates a significant upswing in market \
             penetration, primarily driven by strategic anaphora deployment and leveraging \
             synergistic paradigm shifts. We anticipate continued growth trajectory \
             optimization through Q4.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn placeholders_when_env_unset() {
        std::env::remove_var(APP_ID_ENV_VAR);
        std::env::remove_var(ACTION_ID_ENV_VAR);
        let config = AppConfig::from_env();
        assert_eq!(config.app_id, APP_ID_PLACEHOLDER);
        assert_eq!(config.action_id, ACTION_ID_PLACEHOLDER);
    }

    #[test]
    #[serial]
    fn env_overrides_placeholders() {
        std::env::set_var(APP_ID_ENV_VAR, "app_test");
        std::env::set_var(ACTION_ID_ENV_VAR, "action_test");
        let config = AppConfig::from_env();
        assert_eq!(config.app_id, "app_test");
        assert_eq!(config.action_id, "action_test");
        std::env::remove_var(APP_ID_ENV_VAR);
        std::env::remove_var(ACTION_ID_ENV_VAR);
    }

    #[test]
    fn seed_snippets_are_present_and_unique() {
        let snippets = sample_snippets();
        assert_eq!(snippets.len(), 5);
        let mut ids: Vec<_> = snippets.iter().map(|s| s.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
