//! The routing decision: where a freshly uploaded image goes, and what the
//! rest of the pipeline is told about it.

use md5::{Digest, Md5};

use crate::core::models::RoutingResult;

/// Minimum similarity score for a Rekognition match to count.
pub const FACE_MATCH_THRESHOLD: f32 = 70.0;
/// Only the best match matters.
pub const MAX_FACES: i32 = 1;

/// Deterministic obfuscated filename stem for an object key.
pub fn obfuscated_stem(key: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Classify a routing outcome from the (at most one) matched identity.
///
/// A match routes to `detected/<user>/<stem>.jpg` with an `open` command;
/// no match routes to `unknown/<stem>.jpg` with an `unknown` command and an
/// empty username.
pub fn classify(key: &str, matched_user: Option<&str>) -> RoutingResult {
    let stem = obfuscated_stem(key);
    match matched_user {
        Some(user) => RoutingResult::open(user, format!("detected/{}/{}.jpg", user, stem)),
        None => RoutingResult::unknown(format!("unknown/{}.jpg", stem)),
    }
}
