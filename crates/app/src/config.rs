use serde::{Deserialize, Serialize};

/// Store-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name used in receipt subjects and sign-offs.
    pub store_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_name: "Adoma's Boutique".to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let store_name = std::env::var("BOUTIQUE_STORE_NAME")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| AppConfig::default().store_name);
        Self { store_name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_name() {
        assert_eq!(AppConfig::default().store_name, "Adoma's Boutique");
    }
}
