//! Chunk size tokens such as `512`, `4k`, `16M` or `1g`.

use crate::error::{Result, SplitError};
use std::fmt;
use std::str::FromStr;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * 1024 * 1024;

/// A resolved, non-zero chunk size in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteCount(u64);

impl ByteCount {
    pub fn new(bytes: u64) -> Option<Self> {
        (bytes > 0).then_some(ByteCount(bytes))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ByteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ByteCount {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self> {
        parse_chunk_size(s)
    }
}

/// Resolve a chunk size token into a byte count.
///
/// The final character must be a digit or one of `k`, `m`, `g` (any case),
/// and the token may not contain a decimal point. Everything before the unit
/// is read as a plain decimal integer.
pub fn parse_chunk_size(token: &str) -> Result<ByteCount> {
    let last = token
        .chars()
        .last()
        .ok_or_else(|| SplitError::InvalidChunkFormat(token.to_string()))?;

    let multiplier = match last.to_ascii_lowercase() {
        c if c.is_ascii_digit() => 1,
        'k' => KIB,
        'm' => MIB,
        'g' => GIB,
        _ => return Err(SplitError::InvalidChunkUnit(token.to_string())),
    };

    if token.contains('.') {
        return Err(SplitError::InvalidChunkFormat(token.to_string()));
    }

    let digits = if multiplier == 1 {
        token
    } else {
        // unit letters are ASCII, so this stays on a char boundary
        &token[..token.len() - 1]
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SplitError::InvalidChunkFormat(token.to_string()));
    }

    let bytes = digits
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_mul(multiplier))
        .ok_or_else(|| SplitError::InvalidChunkSize(token.to_string()))?;

    ByteCount::new(bytes).ok_or_else(|| SplitError::InvalidChunkSize(token.to_string()))
}
