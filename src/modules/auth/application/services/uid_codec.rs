use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use uuid::Uuid;

/// Encode a user id for links (`/activate/<uid>/<token>/`).
pub fn encode_uid(user_id: Uuid) -> String {
    URL_SAFE_NO_PAD.encode(user_id.as_bytes())
}

/// Decode a uid path segment. Garbage of any shape yields `None`; callers
/// treat that exactly like an invalid token.
pub fn decode_uid(encoded: &str) -> Option<Uuid> {
    let bytes = URL_SAFE_NO_PAD.decode(encoded).ok()?;
    Uuid::from_slice(&bytes).ok()
}
