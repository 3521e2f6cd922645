use std::fmt;

/// Outcome of following a CNAME chain from a starting name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CnameChain {
    /// The chain ended at `target` after `hops` CNAME records were followed.
    /// `target` is normalized and is the starting name itself when `hops == 0`.
    Resolved { target: String, hops: usize },

    /// The last name was still aliased after `max_depth` CNAME lookups.
    TooLong { max_depth: usize },
}

impl CnameChain {
    pub fn resolved(target: impl Into<String>, hops: usize) -> Self {
        Self::Resolved {
            target: target.into(),
            hops,
        }
    }

    /// The terminal name, if the chain terminated.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Resolved { target, .. } => Some(target),
            Self::TooLong { .. } => None,
        }
    }

    /// A terminal name worth querying further: resolved and non-empty.
    pub fn usable_target(&self) -> Option<&str> {
        self.target().filter(|t| !t.is_empty())
    }

    pub fn hops(&self) -> Option<usize> {
        match self {
            Self::Resolved { hops, .. } => Some(*hops),
            Self::TooLong { .. } => None,
        }
    }
}

impl fmt::Display for CnameChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved { target, hops } => write!(f, "{} ({} hops)", target, hops),
            Self::TooLong { max_depth } => {
                write!(f, "chain too long (still aliased after {} lookups)", max_depth)
            }
        }
    }
}
