//! Cache Entry Module
//!
//! Defines the value wrapper stored by the TTL engine.

use std::time::{Duration, Instant};

// == TTL Entry ==
/// A value paired with its absolute expiry instant.
#[derive(Debug, Clone)]
pub struct TtlEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiry instant, None = never expires
    pub expires_at: Option<Instant>,
}

impl<V> TtlEntry<V> {
    // == Constructor ==
    /// Creates an entry expiring `ttl` after `now`.
    ///
    /// A TTL too large for `Instant` (e.g. `Duration::MAX`) means the entry
    /// never expires.
    pub fn new(value: V, ttl: Option<Duration>, now: Instant) -> Self {
        Self {
            value,
            expires_at: ttl.and_then(|ttl| now.checked_add(ttl)),
        }
    }

    /// Creates an entry that never expires.
    pub fn permanent(value: V) -> Self {
        Self {
            value,
            expires_at: None,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: an entry is expired only once `now` is strictly
    /// past its expiry instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now > expires,
            None => false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    // == Time To Live ==
    /// Returns the time left before expiry.
    ///
    /// # Returns
    /// - `Duration::ZERO` if the entry has expired
    /// - `Duration::MAX` if the entry never expires
    pub fn remaining_ttl_at(&self, now: Instant) -> Duration {
        match self.expires_at {
            Some(expires) => expires.saturating_duration_since(now),
            None => Duration::MAX,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = TtlEntry::new("test_value", None, Instant::now());

        assert_eq!(entry.value, "test_value");
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let entry = TtlEntry::new("test_value", Some(Duration::from_secs(60)), Instant::now());

        assert!(entry.expires_at.is_some());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = TtlEntry::new("test_value", Some(Duration::from_millis(50)), Instant::now());

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(80));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_max_ttl_never_expires() {
        let entry = TtlEntry::new(1u32, Some(Duration::MAX), Instant::now());

        assert!(entry.expires_at.is_none());
        assert_eq!(entry.remaining_ttl_at(Instant::now()), Duration::MAX);
    }

    #[test]
    fn test_remaining_ttl() {
        let now = Instant::now();
        let entry = TtlEntry::new(1u32, Some(Duration::from_secs(10)), now);

        assert_eq!(entry.remaining_ttl_at(now), Duration::from_secs(10));
        assert_eq!(
            entry.remaining_ttl_at(now + Duration::from_secs(4)),
            Duration::from_secs(6)
        );
        assert_eq!(
            entry.remaining_ttl_at(now + Duration::from_secs(11)),
            Duration::ZERO
        );
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = TtlEntry::new("test", Some(Duration::ZERO), now);

        // Not expired at exactly the expiry instant, expired right after
        assert!(!entry.is_expired_at(now));
        assert!(entry.is_expired_at(now + Duration::from_nanos(1)));
    }

    #[test]
    fn test_permanent_entry() {
        let entry = TtlEntry::permanent("v");
        assert!(!entry.is_expired());
        assert_eq!(entry.remaining_ttl_at(Instant::now()), Duration::MAX);
    }
}
