use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use super::error::DirectoryError;

/// Opaque identifier for a trainer record.
///
/// Twelve bytes: 4 of big-endian UNIX seconds, 5 of per-generator entropy,
/// 3 of a wrapping counter. Byte-wise ordering therefore sorts ids by
/// creation instant under a non-decreasing clock, while the entropy/counter
/// tail keeps ids distinct even when the clock stalls or steps backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrainerId([u8; 12]);

impl TrainerId {
    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// The creation instant this id encodes, as UNIX seconds.
    pub fn timestamp_secs(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Parse the 24-character hex rendering produced by `Display`.
    pub fn parse(token: &str) -> Result<Self, DirectoryError> {
        if token.len() != 24 || !token.is_ascii() {
            return Err(DirectoryError::InvalidId(token.to_string()));
        }

        let mut bytes = [0u8; 12];
        for (i, pair) in token.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(pair)
                .map_err(|_| DirectoryError::InvalidId(token.to_string()))?;
            bytes[i] = u8::from_str_radix(pair, 16)
                .map_err(|_| DirectoryError::InvalidId(token.to_string()))?;
        }

        Ok(TrainerId(bytes))
    }
}

impl fmt::Display for TrainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for TrainerId {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrainerId::parse(s)
    }
}

/// Issues identifiers for one directory instance.
///
/// The entropy bytes are drawn once per generator and the counter starts at
/// a random offset, so two generators (or two calls racing on one) cannot
/// collide. The counter wraps at 24 bits.
pub struct IdGenerator {
    entropy: [u8; 5],
    counter: AtomicU32,
}

impl IdGenerator {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        IdGenerator {
            entropy: rng.gen(),
            counter: AtomicU32::new(rng.gen::<u32>() & 0x00ff_ffff),
        }
    }

    pub fn next_id(&self) -> TrainerId {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as u32)
            .unwrap_or(0);
        let count = self.counter.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff;

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(&self.entropy);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        TrainerId(bytes)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::new()
    }
}
