use crate::{LimitPolicy, Styling};

/// Guidance shown once the configured maximum is reached.
pub const LIMIT_REACHED_TEXT: &str = "Maximum number of keywords reached";

/// Placeholder for an empty draft, given the current token count.
pub fn derive_placeholder<'a>(len: usize, limit: LimitPolicy, guidance_text: &'a str) -> &'a str {
    if limit.is_full(len) {
        LIMIT_REACHED_TEXT
    } else {
        guidance_text
    }
}

/// Snapshot handed to the input control on every render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordsViewModel {
    pub label: String,
    pub placeholder: String,
    pub tokens: Vec<String>,
    pub draft: String,
    pub at_limit: bool,
    pub max_tokens: Option<usize>,
    pub styling: Styling,
}
