use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies one submission attempt; threads through the log events of that
/// attempt.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubmissionId({})", &self.0.to_string()[..8])
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = SubmissionId::new();
        let b = SubmissionId::new();
        assert_ne!(a, b);
        assert_eq!(a.as_uuid().get_version_num(), 7);
    }

    #[test]
    fn debug_is_abbreviated() {
        let id = SubmissionId::new();
        let debug = format!("{id:?}");
        assert!(debug.starts_with("SubmissionId("));
        assert_eq!(debug.len(), "SubmissionId(".len() + 8 + 1);
        assert_eq!(id.to_string().len(), 36);
    }
}
