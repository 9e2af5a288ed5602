//! Search budget and branching configuration.

use serde::{Deserialize, Serialize};

use crate::errors::SolveError;

/// Longest chain the search can represent.
///
/// Chain states use fixed-size arrays of this length, so `max_chain_length`
/// must not exceed it.
pub const MAX_CHAIN_LENGTH: usize = 8;

/// Limits for one solve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Total number of states taken off the frontier before giving up.
    pub max_iterations: usize,
    /// Chains of this many words are never extended.
    pub max_chain_length: usize,
    /// Candidates kept when extending a one-word chain.
    pub branch_limit_shallow: usize,
    /// Candidates kept when extending longer chains.
    pub branch_limit_deep: usize,
    /// Return the best single word when no covering chain is found.
    pub partial_fallback: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100_000,
            max_chain_length: 5,
            branch_limit_shallow: 25,
            branch_limit_deep: 15,
            partial_fallback: true,
        }
    }
}

impl SearchConfig {
    /// A smaller budget for interactive use and fixed local word lists.
    pub fn quick() -> Self {
        Self {
            max_iterations: 10_000,
            max_chain_length: 4,
            branch_limit_shallow: 10,
            branch_limit_deep: 5,
            partial_fallback: true,
        }
    }

    /// Branch limit for extending a chain that currently has `chain_length` words.
    #[inline]
    pub fn branch_limit(&self, chain_length: usize) -> usize {
        if chain_length == 1 {
            self.branch_limit_shallow
        } else {
            self.branch_limit_deep
        }
    }

    /// Checks that every limit is usable.
    pub fn validate(&self) -> Result<(), SolveError> {
        let reason = if self.max_iterations == 0 {
            "max_iterations must be at least 1".to_string()
        } else if !(1..=MAX_CHAIN_LENGTH).contains(&self.max_chain_length) {
            format!(
                "max_chain_length must be between 1 and {MAX_CHAIN_LENGTH}, got {}",
                self.max_chain_length
            )
        } else if self.branch_limit_shallow == 0 || self.branch_limit_deep == 0 {
            "branch limits must be at least 1".to_string()
        } else {
            return Ok(());
        };
        Err(SolveError::InvalidConfig { reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(SearchConfig::default().validate(), Ok(()));
        assert_eq!(SearchConfig::quick().validate(), Ok(()));
    }

    #[test]
    fn test_branch_limit_depends_on_depth() {
        let config = SearchConfig::default();
        assert_eq!(config.branch_limit(1), 25);
        assert_eq!(config.branch_limit(2), 15);
        assert_eq!(config.branch_limit(4), 15);
    }

    #[test]
    fn test_out_of_range_limits_are_rejected() {
        let too_long = SearchConfig {
            max_chain_length: MAX_CHAIN_LENGTH + 1,
            ..SearchConfig::default()
        };
        assert!(matches!(
            too_long.validate(),
            Err(SolveError::InvalidConfig { .. })
        ));

        let no_budget = SearchConfig {
            max_iterations: 0,
            ..SearchConfig::default()
        };
        assert!(no_budget.validate().is_err());

        let no_branches = SearchConfig {
            branch_limit_deep: 0,
            ..SearchConfig::default()
        };
        assert!(no_branches.validate().is_err());
    }
}
