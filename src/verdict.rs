//! Validation verdicts.

use serde::Serialize;
use std::fmt;

use crate::Reason;

/// Outcome of validating one detected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "verdict", content = "reason")]
pub enum Verdict {
    /// The value is admissible
    Accepted,
    /// The value must not be acted on
    Rejected(Reason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// The rejection reason, `None` when accepted.
    pub fn reason(&self) -> Option<Reason> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(reason) => Some(*reason),
        }
    }
}

impl From<Option<Reason>> for Verdict {
    fn from(reason: Option<Reason>) -> Self {
        match reason {
            Some(reason) => Verdict::Rejected(reason),
            None => Verdict::Accepted,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::Rejected(reason) => write!(f, "rejected ({})", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_accessors() {
        assert!(Verdict::Accepted.is_accepted());
        assert_eq!(Verdict::Accepted.reason(), None);

        let rejected = Verdict::Rejected(Reason::Loopback);
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.reason(), Some(Reason::Loopback));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Verdict::from(None), Verdict::Accepted);
        assert_eq!(
            Verdict::from(Some(Reason::InvalidTld)),
            Verdict::Rejected(Reason::InvalidTld)
        );
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Accepted.to_string(), "accepted");
        assert_eq!(
            Verdict::Rejected(Reason::NotPublic).to_string(),
            "rejected (Non-Public IP)"
        );
    }
}
