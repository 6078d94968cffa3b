use relay_types::ProxyError;
use thiserror::Error;

/// Upstream output that cannot be expressed as a Claude response.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("tool call {id} carried arguments that are not valid JSON: {source}")]
    MalformedToolArguments {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("upstream response contained no choices")]
    EmptyChoices,
}

impl From<TranslationError> for ProxyError {
    fn from(err: TranslationError) -> Self {
        ProxyError::UpstreamContract { message: err.to_string() }
    }
}
