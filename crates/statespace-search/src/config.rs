//! Search configuration.

/// Which algorithm [`crate::Search::run`] uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    AStar,
}

impl Strategy {
    /// All strategies, in the order the demos report them.
    pub const ALL: [Strategy; 3] = [Self::DepthFirst, Self::BreadthFirst, Self::AStar];

    pub fn name(self) -> &'static str {
        match self {
            Self::DepthFirst => "depth-first",
            Self::BreadthFirst => "breadth-first",
            Self::AStar => "A*",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Bounds on a single search call.
///
/// The default is unbounded: a search over an infinite space with no
/// reachable goal never returns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchLimits {
    /// Stop after this many node expansions.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub const UNBOUNDED: Self = Self {
        max_expansions: None,
    };

    /// Limits that stop after `n` expansions.
    pub const fn expansions(n: usize) -> Self {
        Self {
            max_expansions: Some(n),
        }
    }

    #[inline]
    pub(crate) fn allows(&self, expanded: usize) -> bool {
        self.max_expansions.is_none_or(|max| expanded < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_allows_everything() {
        assert!(SearchLimits::default().allows(usize::MAX - 1));
        assert_eq!(SearchLimits::default(), SearchLimits::UNBOUNDED);
    }

    #[test]
    fn expansion_limit_is_exclusive() {
        let limits = SearchLimits::expansions(2);
        assert!(limits.allows(0));
        assert!(limits.allows(1));
        assert!(!limits.allows(2));
    }

    #[test]
    fn strategy_names() {
        assert_eq!(Strategy::AStar.to_string(), "A*");
        assert_eq!(Strategy::ALL.len(), 3);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn limits_default_missing_fields() {
        let limits: SearchLimits = serde_json::from_str("{}").unwrap();
        assert_eq!(limits, SearchLimits::UNBOUNDED);
        let limits: SearchLimits = serde_json::from_str(r#"{"max_expansions":7}"#).unwrap();
        assert_eq!(limits, SearchLimits::expansions(7));
    }

    #[test]
    fn strategy_uses_variant_names() {
        let s: Strategy = serde_json::from_str(r#""BreadthFirst""#).unwrap();
        assert_eq!(s, Strategy::BreadthFirst);
    }
}
