use rand::Rng;

fn random_alphanumeric(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Synthetic message id for streamed responses (`msg_` + 24 lowercase alphanumerics).
pub fn generate_message_id() -> String {
    format!("msg_{}", random_alphanumeric(24).to_lowercase())
}

/// Short id used to correlate log lines of one request.
pub fn generate_trace_id() -> String {
    random_alphanumeric(6).to_lowercase()
}
