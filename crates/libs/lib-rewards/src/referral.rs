//! # Referral Codes
//!
//! Codes have the form `<email>-REF<n>` with `n` in `0..=9999`. They are made up
//! on the client for every dashboard fetch, so the same user can see a
//! different code after a re-mount.

use std::fmt;

use rand::Rng;

pub const REFERRAL_MARKER: &str = "-REF";
pub const MAX_REFERRAL_SUFFIX: u16 = 9999;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferralCode(String);

impl ReferralCode {
    pub fn from_parts(email: &str, suffix: u16) -> Self {
        Self(format!("{}{}{}", email, REFERRAL_MARKER, suffix))
    }

    pub fn generate<R: Rng + ?Sized>(email: &str, rng: &mut R) -> Self {
        Self::from_parts(email, rng.random_range(0..=MAX_REFERRAL_SUFFIX))
    }

    /// Generate with the thread-local RNG.
    pub fn random(email: &str) -> Self {
        Self::generate(email, &mut rand::rng())
    }

    /// Split a code back into email and suffix. The last marker wins, so emails
    /// that contain `-REF` themselves still parse.
    pub fn parse(code: &str) -> Option<(&str, u16)> {
        let (email, suffix) = code.rsplit_once(REFERRAL_MARKER)?;
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let suffix: u16 = suffix.parse().ok()?;
        (suffix <= MAX_REFERRAL_SUFFIX).then_some((email, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferralCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_code_format() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let code = ReferralCode::generate("a@b.com", &mut rng);
            let (email, suffix) = ReferralCode::parse(code.as_str()).unwrap();
            assert_eq!(email, "a@b.com");
            assert!(suffix <= MAX_REFERRAL_SUFFIX);
        }
    }

    #[test]
    fn test_codes_are_not_stable() {
        let mut rng = StdRng::seed_from_u64(42);
        let codes: std::collections::HashSet<String> = (0..50)
            .map(|_| ReferralCode::generate("a@b.com", &mut rng).to_string())
            .collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_parse() {
        assert_eq!(ReferralCode::parse("a@b.com-REF0"), Some(("a@b.com", 0)));
        assert_eq!(ReferralCode::parse("x-REF@b.com-REF9999"), Some(("x-REF@b.com", 9999)));
        assert_eq!(ReferralCode::parse("a@b.com-REF10000"), None);
        assert_eq!(ReferralCode::parse("a@b.com-REF"), None);
        assert_eq!(ReferralCode::parse("a@b.com-REF-1"), None);
        assert_eq!(ReferralCode::parse("a@b.com"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ReferralCode::from_parts("a@b.com", 17).to_string(), "a@b.com-REF17");
    }
}
