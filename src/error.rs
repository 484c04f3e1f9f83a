use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    // Configuration errors
    #[error("Missing environment variable: {name}")]
    MissingEnv { name: String },

    #[error("Invalid value for {name}: '{value}'")]
    InvalidEnv { name: String, value: String },

    // Webhook errors
    #[error("Webhook returned status {status}: {body}")]
    WebhookStatus { status: u16, body: String },

    #[error("Webhook transport error: {source}")]
    WebhookTransport {
        #[from]
        source: reqwest::Error,
    },
}

pub type Result<T> = std::result::Result<T, BotError>;
