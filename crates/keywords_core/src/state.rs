use keywords_logging::kw_debug;

use crate::view_model::{derive_placeholder, KeywordsViewModel};
use crate::{ControlConfig, LimitPolicy};

/// Outcome of offering a candidate to the token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Accepted,
    /// Candidate was blank after trimming.
    Empty,
    Duplicate,
    LimitReached,
}

/// Ordered, duplicate-free list of confirmed tokens (newest last).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenSet {
    tokens: Vec<String>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Trims `candidate` and appends it when non-empty, new, and within the limit.
    pub fn admit(&mut self, candidate: &str, policy: LimitPolicy) -> Admission {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return Admission::Empty;
        }
        if self.contains(trimmed) {
            return Admission::Duplicate;
        }
        if policy.is_full(self.len()) {
            return Admission::LimitReached;
        }
        self.tokens.push(trimmed.to_owned());
        Admission::Accepted
    }

    /// Replaces the whole list verbatim, keeping only the first `max` entries.
    ///
    /// Uniqueness of `tokens` is the input control's guarantee; nothing is
    /// trimmed or deduplicated here.
    pub fn replace_all(&mut self, tokens: Vec<String>, policy: LimitPolicy) {
        self.tokens = policy.truncate(tokens);
    }

    /// Removes the matching token; returns whether anything was removed.
    pub fn remove(&mut self, token: &str) -> bool {
        match self.tokens.iter().position(|t| t == token) {
            Some(index) => {
                self.tokens.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Everything one mounted control owns: configuration, tokens and draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlState {
    config: ControlConfig,
    limit: LimitPolicy,
    tokens: TokenSet,
    draft: String,
    dirty: bool,
}

impl ControlState {
    /// Seeds the token list from `config.initial_tokens`.
    pub fn new(config: ControlConfig) -> Self {
        let limit = config.limit();
        let mut tokens = TokenSet::new();
        tokens.replace_all(config.initial_tokens.clone(), limit);
        if tokens.len() != config.initial_tokens.len() {
            kw_debug!(
                "Seeded {} of {} initial tokens",
                tokens.len(),
                config.initial_tokens.len()
            );
        }
        Self {
            config,
            limit,
            tokens,
            draft: String::new(),
            // A freshly mounted control has never been rendered.
            dirty: true,
        }
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub fn limit(&self) -> LimitPolicy {
        self.limit
    }

    pub fn tokens(&self) -> &[String] {
        self.tokens.as_slice()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn placeholder(&self) -> &str {
        derive_placeholder(self.tokens.len(), self.limit, &self.config.guidance_text)
    }

    pub fn is_at_limit(&self) -> bool {
        self.limit.is_full(self.tokens.len())
    }

    pub fn view(&self) -> KeywordsViewModel {
        KeywordsViewModel {
            label: self.config.label.clone(),
            placeholder: self.placeholder().to_string(),
            tokens: self.tokens.as_slice().to_vec(),
            draft: self.draft.clone(),
            at_limit: self.is_at_limit(),
            max_tokens: self.limit.max(),
            styling: self.config.styling.clone(),
        }
    }

    /// Returns whether a re-render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_draft(&mut self, text: String) {
        if self.draft != text {
            self.draft = text;
            self.dirty = true;
        }
    }

    pub(crate) fn clear_draft(&mut self) {
        self.set_draft(String::new());
    }

    pub(crate) fn admit_draft(&mut self) -> Admission {
        let admission = self.tokens.admit(&self.draft, self.limit);
        if admission == Admission::Accepted {
            self.dirty = true;
        }
        admission
    }

    pub(crate) fn replace_tokens(&mut self, tokens: Vec<String>) {
        self.tokens.replace_all(tokens, self.limit);
        self.dirty = true;
    }

    pub(crate) fn remove_token(&mut self, token: &str) -> bool {
        let removed = self.tokens.remove(token);
        if removed {
            self.dirty = true;
        }
        removed
    }
}
