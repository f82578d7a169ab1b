//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional free-text filter for list endpoints (`?q=`).
///
/// A blank term is treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// The search term, if one was given.
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_term_is_absent() {
        let params = SearchParams {
            q: Some("   ".into()),
        };
        assert_eq!(params.term(), None);
        assert_eq!(SearchParams::default().term(), None);
    }

    #[test]
    fn term_is_trimmed() {
        let params = SearchParams {
            q: Some(" ana ".into()),
        };
        assert_eq!(params.term(), Some("ana"));
    }
}
