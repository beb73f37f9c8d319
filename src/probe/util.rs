use rand::{Rng, distributions::Alphanumeric};

/// Random alphanumeric local part for the catch-all probe. Length is
/// clamped to 6..=32; unpredictability matters here, cryptographic
/// strength does not.
pub(crate) fn random_local_part(len: usize) -> String {
    let length = len.clamp(6, 32);
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_length() {
        assert_eq!(random_local_part(2).len(), 6);
        assert_eq!(random_local_part(24).len(), 24);
        assert_eq!(random_local_part(100).len(), 32);
    }

    #[test]
    fn yields_alphanumeric_only() {
        let local = random_local_part(32);
        assert!(local.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn successive_calls_differ() {
        assert_ne!(random_local_part(24), random_local_part(24));
    }
}
