use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenRouter,
}

impl Provider {
    pub fn all() -> &'static [Provider] {
        &[Provider::OpenRouter]
    }

    pub fn env_var_name(&self) -> &'static str {
        match self {
            Provider::OpenRouter => "OPENROUTER_API_KEY",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::OpenRouter => "OpenRouter",
        }
    }

    /// Where to obtain a key, shown when none is configured.
    pub fn key_url(&self) -> &'static str {
        match self {
            Provider::OpenRouter => "https://openrouter.ai/keys",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::OpenRouter => write!(f, "openrouter"),
        }
    }
}
