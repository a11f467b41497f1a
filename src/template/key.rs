//! Keys under which renderers are registered

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Name used when a definition or reuse does not specify one
pub const DEFAULT_TEMPLATE_NAME: &str = "default";

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Anonymous identity allocated once per factory call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateToken(u64);

impl TemplateToken {
    /// Allocate a token no other call has returned
    pub fn fresh() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

/// Identifier of a template within one owner scope
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    /// Caller-supplied name, shared by every definition or reuse using it
    Name(String),
    /// Generated identity, only reachable through the pair that owns it
    Token(TemplateToken),
}

impl TemplateKey {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn fresh_token() -> Self {
        Self::Token(TemplateToken::fresh())
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }
}

impl Default for TemplateKey {
    fn default() -> Self {
        Self::Name(DEFAULT_TEMPLATE_NAME.to_string())
    }
}

impl From<&str> for TemplateKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for TemplateKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKey::Name(name) => write!(f, "\"{}\"", name),
            TemplateKey::Token(token) => write!(f, "<anonymous #{}>", token.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        assert_eq!(TemplateKey::default(), TemplateKey::from("default"));
    }

    #[test]
    fn test_tokens_never_collide() {
        let a = TemplateKey::fresh_token();
        let b = TemplateKey::fresh_token();
        assert_ne!(a, b);
        assert!(a.is_token());
        assert!(!TemplateKey::from("a").is_token());
    }

    #[test]
    fn test_display() {
        assert_eq!(TemplateKey::from("foo").to_string(), "\"foo\"");
        assert!(TemplateKey::fresh_token().to_string().starts_with("<anonymous #"));
    }
}
