//! Symbolic qubit and identity types.

use alsvid_amp::Amplitude;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum tag length in bytes.
pub const TAG_MAX_LEN: usize = 32;

/// Opaque 64-bit qubit identity, assigned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u64);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u64> for QubitId {
    fn from(id: u64) -> Self {
        QubitId(id)
    }
}

/// Human-readable qubit label, bounded at [`TAG_MAX_LEN`] bytes.
///
/// Gates read the tag for event records but never modify it. Longer input is
/// truncated at a character boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Build a tag, truncating to the byte bound at a char boundary.
    pub fn new(label: impl Into<String>) -> Tag {
        let mut label = label.into();
        if label.len() > TAG_MAX_LEN {
            let mut end = TAG_MAX_LEN;
            while !label.is_char_boundary(end) {
                end -= 1;
            }
            label.truncate(end);
        }
        Tag(label)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(label: &str) -> Self {
        Tag::new(label)
    }
}

/// A symbolic qubit: identity, label, and exactly one complex amplitude.
///
/// The amplitude is mutated in place by gate application. Creation and
/// destruction belong to the caller; the engine never consumes a qubit.
/// Nothing here enforces |amplitude| = 1 — magnitude drifts freely under
/// the catalog's transformations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qubit<A> {
    /// Caller-assigned identity.
    pub id: QubitId,
    /// Read-only label carried into event records.
    pub tag: Tag,
    /// The single complex amplitude.
    pub amplitude: A,
}

impl<A: Amplitude> Qubit<A> {
    /// Create a qubit with the given identity, label, and amplitude.
    pub fn new(id: impl Into<QubitId>, tag: impl Into<Tag>, amplitude: A) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            amplitude,
        }
    }

    /// Threshold test for this qubit acting as a control.
    pub fn control_active(&self) -> bool {
        self.amplitude.control_active()
    }
}

impl From<String> for Tag {
    fn from(label: String) -> Self {
        Tag::new(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_qubit_display() {
        let id = QubitId(7);
        assert_eq!(format!("{id}"), "q7");
    }

    #[test]
    fn test_tag_truncates_at_bound() {
        let tag = Tag::new("a".repeat(40));
        assert_eq!(tag.as_str().len(), TAG_MAX_LEN);
    }

    #[test]
    fn test_tag_truncates_at_char_boundary() {
        // 3-byte chars: the 32-byte cut would split one, so 30 bytes survive.
        let tag = Tag::new("€".repeat(12));
        assert_eq!(tag.as_str().len(), 30);
        assert!(tag.as_str().chars().all(|c| c == '€'));
    }

    #[test]
    fn test_control_active_threshold() {
        let q = Qubit::new(0u64, "ctl", Complex64::new(1.0, 0.0));
        assert!(q.control_active());
        let q = Qubit::new(1u64, "ctl", Complex64::new(0.0, 0.0));
        assert!(!q.control_active());
    }
}
