//! Deterministic rollout bucketing
//!
//! Maps (feature name, actor identifier) to a bucket in `[0, 10000)` so
//! percentage-of-actors gates include the same actors across restarts and
//! across processes. The bucket space carries two fractional digits of
//! percentage precision. Hashing the feature name alongside the actor id
//! keeps rollouts of different features uncorrelated.

use sha2::{Digest, Sha256};

/// Number of buckets in the hash space
pub const BUCKETS: u32 = 10_000;

/// Compute the rollout bucket for an actor under a feature.
///
/// Deterministic: the same feature/actor pair always lands in the same
/// bucket.
pub fn bucket(feature_name: &str, actor_id: &str) -> u32 {
    let mut hasher = Sha256::new();
    hasher.update(feature_name.as_bytes());
    hasher.update(actor_id.as_bytes());
    let digest = hasher.finalize();

    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]) % BUCKETS
}

/// Bucket threshold for a percentage, truncated so raising the percentage
/// never removes previously included actors.
pub fn threshold(percentage: f64) -> u32 {
    (percentage * (BUCKETS / 100) as f64) as u32
}

/// Whether an actor falls inside the rollout percentage for a feature
pub fn within_percentage(feature_name: &str, actor_id: &str, percentage: f64) -> bool {
    bucket(feature_name, actor_id) < threshold(percentage)
}
