//! Random token generation
//!
//! Isolated so the token source can be swapped for a cryptographically
//! strong one without touching the artifact-writing code. The current source
//! is fastrand, which is not suitable for production secrets; generated
//! values are placeholders the user is expected to rotate.

/// Generate a random token of `len` characters drawn from `[a-zA-Z0-9]`
pub fn alphanumeric_token(len: usize) -> String {
    (0..len).map(|_| fastrand::alphanumeric()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length() {
        assert_eq!(alphanumeric_token(40).chars().count(), 40);
        assert_eq!(alphanumeric_token(0).len(), 0);
    }

    #[test]
    fn test_token_charset() {
        let token = alphanumeric_token(200);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_tokens_differ_between_calls() {
        // 40 alphanumeric chars colliding by chance is not a realistic event
        assert_ne!(alphanumeric_token(40), alphanumeric_token(40));
    }
}
