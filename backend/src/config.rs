use std::env;

pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const GROQ_MODEL: &str = "llama3-8b-8192";

/// Groq connection settings, read once at startup and passed down by value.
/// The key may be absent; the fetcher reports that per-request rather than
/// refusing to boot.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("GROQ_API_KEY").ok().filter(|key| !key.is_empty()),
            api_url: GROQ_API_URL.to_string(),
            model: GROQ_MODEL.to_string(),
        }
    }
}
