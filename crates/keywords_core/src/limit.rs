/// Cardinality rule for the token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LimitPolicy {
    max: Option<usize>,
}

impl LimitPolicy {
    pub fn unbounded() -> Self {
        Self { max: None }
    }

    /// Interprets a host-supplied maximum; anything not strictly positive is unbounded.
    pub fn from_config(raw: Option<i64>) -> Self {
        match raw {
            Some(max) if max > 0 => Self {
                max: Some(usize::try_from(max).unwrap_or(usize::MAX)),
            },
            _ => Self::unbounded(),
        }
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// True when a list of `len` tokens may grow by one.
    pub fn has_room(&self, len: usize) -> bool {
        self.max.is_none_or(|max| len < max)
    }

    pub fn is_full(&self, len: usize) -> bool {
        !self.has_room(len)
    }

    /// Keeps the first `max` tokens and drops the tail.
    pub fn truncate(&self, mut tokens: Vec<String>) -> Vec<String> {
        if let Some(max) = self.max {
            tokens.truncate(max);
        }
        tokens
    }
}
