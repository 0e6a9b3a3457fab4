//! Size limits applied while populating a store from a decoded document.
//!
//! The store itself never rejects a value. These limits only guard the
//! [`bridge`](crate::bridge) against documents that are too large or too deep
//! to be worth keeping in memory.
//!
//! - E110_InputTooLarge: Total input size limit
//! - E111_NestingTooDeep: Maximum nesting depth
//! - E113_TooManyFields: Maximum object fields
//! - E114_ArrayTooLong: Maximum array length

/// Nesting depth at which serde_json stops decoding.
pub const SERDE_RECURSION_LIMIT: u64 = 128;

/// Population limits.
///
/// `max_nesting_depth` must stay below serde_json's own recursion limit
/// ([`SERDE_RECURSION_LIMIT`]) so that deep documents fail with E111 rather
/// than a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes (E110)
    pub max_input_size: u64,
    /// Maximum nesting depth for arrays/objects (E111)
    pub max_nesting_depth: u64,
    /// Maximum number of fields in an object (E113)
    pub max_object_fields: u64,
    /// Maximum number of elements in an array (E114)
    pub max_array_length: u64,
}

impl Limits {
    /// Default limits, sized for RPC responses.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 4 * 1024 * 1024, // 4 MiB
            max_nesting_depth: 32,           // 32 levels
            max_object_fields: 1024,         // 1024 fields
            max_array_length: 10_000,        // 10,000 elements
        }
    }

    /// Lenient limits for offline inspection of large dumps.
    pub const fn lenient() -> Self {
        Self {
            max_input_size: 64 * 1024 * 1024, // 64 MiB
            max_nesting_depth: 64,            // 64 levels
            max_object_fields: 100_000,       // 100,000 fields
            max_array_length: 1_000_000,      // 1,000,000 elements
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_limits() {
        let limits = Limits::strict();
        assert_eq!(limits.max_input_size, 4 * 1024 * 1024);
        assert_eq!(limits.max_nesting_depth, 32);
        assert_eq!(limits.max_object_fields, 1024);
        assert_eq!(limits.max_array_length, 10_000);
        assert_eq!(Limits::default(), limits);
    }

    #[test]
    fn test_lenient_limits() {
        let lenient = Limits::lenient();
        let strict = Limits::strict();
        assert!(lenient.max_input_size > strict.max_input_size);
        assert!(lenient.max_nesting_depth > strict.max_nesting_depth);
        assert!(lenient.max_object_fields > strict.max_object_fields);
        assert!(lenient.max_array_length > strict.max_array_length);
    }

    #[test]
    fn test_depth_limits_below_decoder_limit() {
        // One level past the limit must still decode so E111 can be raised.
        for limits in [Limits::strict(), Limits::lenient()] {
            assert!(limits.max_nesting_depth + 1 < SERDE_RECURSION_LIMIT);
        }
    }
}
