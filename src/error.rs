use thiserror::Error;

#[derive(Error, Debug)]
pub enum PilotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Completion API returned {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Completion API returned an empty response")]
    EmptyResponse,

    #[error("Unauthorized: Invalid or missing OpenRouter API key. Check your `.env` file or run: promptpilot auth login")]
    Unauthorized,

    #[error("No OpenRouter API key found. Set OPENROUTER_API_KEY (in the environment or `.env`) or run: promptpilot auth login")]
    MissingApiKey,

    #[error("Model {0} is not supported.")]
    UnsupportedModel(String),

    #[error("Iteration count must be at least 1 (got {0})")]
    InvalidIterations(u32),

    #[error("Please enter a prompt to analyze.")]
    EmptyPrompt,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Auth error: {0}")]
    Auth(String),
}

pub type Result<T> = std::result::Result<T, PilotError>;
