//! Tunables for the iterative parts of the kernel.
//!
//! Policy
//! - Defaults are fixed and cover typical O(1) scales; callers pass a config
//!   only when they need to trade accuracy for speed.

/// Lagrangian line search used by half-space intersections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSearchCfg {
    /// How often the bracket `[0, h]` may double while the objective still decreases.
    pub max_doublings: usize,
    /// Ternary-search steps inside the final bracket.
    pub iterations: usize,
}

impl Default for LineSearchCfg {
    fn default() -> Self {
        Self {
            max_doublings: 60,
            iterations: 80,
        }
    }
}

/// ε-close polygon refinement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefineCfg {
    /// Upper bound on the number of template directions before giving up.
    pub max_directions: usize,
}

impl Default for RefineCfg {
    fn default() -> Self {
        Self {
            max_directions: 4096,
        }
    }
}

/// Support-function oracle used by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Oracle {
    /// `support_function`: the tightest value the set can give.
    #[default]
    Exact,
    /// `support_function_upper_bound`: cheaper, never below the exact value.
    UpperBound,
}
