use sha2::{Digest, Sha256};

/// Hash a token using SHA-256 for storage.
/// Raw tokens never reach the blacklist store.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_token_is_deterministic() {
        assert_eq!(hash_token("my_token_123"), hash_token("my_token_123"));
    }

    #[test]
    fn hash_token_distinguishes_inputs() {
        assert_ne!(hash_token("token_1"), hash_token("token_2"));
    }

    #[test]
    fn hash_token_is_sha256_hex() {
        assert_eq!(hash_token("any_token").len(), 64);
    }
}
