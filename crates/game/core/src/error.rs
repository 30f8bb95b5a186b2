//! Error classification shared by combat-core error types.
//!
//! Concrete errors live beside the operations that raise them (see
//! [`crate::combat::AttackError`]). Each of them ends a single attack
//! attempt and leaves the world untouched, so there is no fatal class.

/// How a host should treat a rejected attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The same request may succeed later: stamina recovers, a target walks
    /// into reach.
    Recoverable,

    /// The request is wrong as made: wrong kind of target, stale id.
    Validation,
}

impl ErrorSeverity {
    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Classification implemented by combat errors.
pub trait GameError: std::error::Error {
    fn severity(&self) -> ErrorSeverity;

    /// Stable `SCREAMING_SNAKE_CASE` identifier for logs and clients.
    fn error_code(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_renders_snake_case() {
        assert_eq!(ErrorSeverity::Recoverable.to_string(), "recoverable");
        assert_eq!(<&str>::from(ErrorSeverity::Validation), "validation");
        assert!(!ErrorSeverity::Validation.is_recoverable());
    }
}
