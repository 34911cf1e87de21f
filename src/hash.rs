//! String digests used to place keys into buckets.
//!
//! Two interchangeable non-cryptographic digests over the UTF-8 bytes of a
//! key; a table picks exactly one at construction via [`HashKind`]. Both
//! accumulate into a `u64` with wraparound.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Historical starting accumulator for [`djb2`].
const DJB2_SEED: u64 = 5381;
/// Historical per-byte multiplier for [`djb2`].
const DJB2_MULTIPLIER: u64 = 33;
/// 64-bit FNV prime used by [`fnv1`].
const FNV_PRIME: u64 = 1_099_511_628_211;
/// 64-bit FNV offset basis used by [`fnv1`].
const FNV_OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;

/// Digest algorithm a table uses for bucket placement.
///
/// Parses from the configuration names `"djb2"` and `"fnv1"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashKind {
    /// Bernstein's multiplicative hash, the default.
    #[default]
    Djb2,
    /// 64-bit Fowler-Noll-Vo, multiply-then-xor variant.
    Fnv1,
}

impl HashKind {
    /// Digests `key` with the selected algorithm.
    #[must_use]
    pub fn digest(self, key: &str) -> u64 {
        match self {
            Self::Djb2 => djb2(key),
            Self::Fnv1 => fnv1(key),
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Djb2 => f.write_str("djb2"),
            Self::Fnv1 => f.write_str("fnv1"),
        }
    }
}

impl FromStr for HashKind {
    type Err = ParseHashKindError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "djb2" => Ok(Self::Djb2),
            "fnv1" => Ok(Self::Fnv1),
            _ => Err(ParseHashKindError { name: name.to_owned() }),
        }
    }
}

/// Error returned when a hash function name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHashKindError {
    /// The name that failed to parse.
    name: String,
}

impl fmt::Display for ParseHashKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized hash function `{}`, expected `djb2` or `fnv1`", self.name)
    }
}

impl Error for ParseHashKindError {}

/// DJB2 digest of `key`'s UTF-8 bytes.
///
/// Starts at 5381 and folds each byte with `digest * 33 + byte`, wrapping at
/// 64 bits.
///
/// ```rust
/// assert_eq!(chaintable::djb2(""), 5381);
/// assert_eq!(chaintable::djb2("a"), 177_670);
/// ```
#[must_use]
pub fn djb2(key: &str) -> u64 {
    let mut digest = DJB2_SEED;
    for &byte in key.as_bytes() {
        digest = digest.wrapping_mul(DJB2_MULTIPLIER).wrapping_add(u64::from(byte));
    }
    digest
}

/// FNV-1 digest of `key`'s UTF-8 bytes, 64-bit variant.
///
/// Starts at the offset basis and folds each byte with
/// `(digest * FNV_PRIME) ^ byte`, wrapping at 64 bits. This is FNV-1
/// (multiply before xor), not FNV-1a.
///
/// ```rust
/// assert_eq!(chaintable::fnv1(""), 14_695_981_039_346_656_037);
/// ```
#[must_use]
pub fn fnv1(key: &str) -> u64 {
    let mut digest = FNV_OFFSET_BASIS;
    for &byte in key.as_bytes() {
        digest = digest.wrapping_mul(FNV_PRIME) ^ u64::from(byte);
    }
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_djb2_known_digests() {
        assert_eq!(djb2(""), 5381);
        assert_eq!(djb2("a"), 177_670);
        assert_eq!(djb2("ab"), 5_863_208);
    }

    #[test]
    fn test_fnv1_known_digests() {
        assert_eq!(fnv1(""), 14_695_981_039_346_656_037);
        assert_eq!(fnv1("a"), 12_638_153_115_695_167_422);
        assert_eq!(fnv1("hello"), 8_883_723_591_023_973_575);
    }

    #[test]
    fn test_digests_are_deterministic() {
        for key in ["", "a", "chain", "a longer key with spaces"] {
            assert_eq!(djb2(key), djb2(key));
            assert_eq!(fnv1(key), fnv1(key));
        }
    }

    #[test]
    fn test_digests_disagree_on_common_keys() {
        for key in ["a", "chain", "bucket"] {
            assert_ne!(djb2(key), fnv1(key));
        }
    }

    #[test]
    fn test_kind_selects_algorithm() {
        assert_eq!(HashKind::Djb2.digest("hello"), djb2("hello"));
        assert_eq!(HashKind::Fnv1.digest("hello"), fnv1("hello"));
        assert_eq!(HashKind::default(), HashKind::Djb2);
    }

    #[test]
    fn test_parse_recognized_names() {
        assert_eq!("djb2".parse::<HashKind>(), Ok(HashKind::Djb2));
        assert_eq!("fnv1".parse::<HashKind>(), Ok(HashKind::Fnv1));
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert!("fnv1a".parse::<HashKind>().is_err());
        assert!("DJB2".parse::<HashKind>().is_err());
        assert!("".parse::<HashKind>().is_err());

        let error = "md5".parse::<HashKind>().err();
        assert_eq!(
            error.map(|error| error.to_string()),
            Some("unrecognized hash function `md5`, expected `djb2` or `fnv1`".to_string())
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in [HashKind::Djb2, HashKind::Fnv1] {
            assert_eq!(kind.to_string().parse::<HashKind>(), Ok(kind));
        }
    }
}
