/// Element comparisons the automatic ceiling allows, roughly `(n + m) * D`.
pub const WORK_BUDGET: usize = 1 << 30;
/// Lowest ceiling [`EditCeiling::Auto`] resolves to, whatever the input size.
pub const MIN_AUTO_CEILING: usize = 256;
/// Highest ceiling [`EditCeiling::Auto`] resolves to. Bounds the trace arena to ~D²/2 entries.
pub const MAX_AUTO_CEILING: usize = 4096;

/// Upper bound on the edit distance the engine searches for before giving up and
/// replacing the differing region wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditCeiling {
    /// `WORK_BUDGET / (n + m)`, clamped to `[MIN_AUTO_CEILING, MAX_AUTO_CEILING]`.
    #[default]
    Auto,
    Fixed(usize),
    /// Always compute the exact script.
    Unbounded,
}

impl EditCeiling {
    /// Ceiling for a region of `old_len` and `new_len` elements.
    pub fn resolve(self, old_len: usize, new_len: usize) -> usize {
        match self {
            EditCeiling::Auto => {
                let total = old_len.saturating_add(new_len).max(1);
                (WORK_BUDGET / total).clamp(MIN_AUTO_CEILING, MAX_AUTO_CEILING)
            }
            EditCeiling::Fixed(limit) => limit,
            EditCeiling::Unbounded => usize::MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffConfig {
    pub ceiling: EditCeiling,
}

impl DiffConfig {
    /// Config that never falls back.
    pub fn exact() -> Self {
        Self {
            ceiling: EditCeiling::Unbounded,
        }
    }

    pub fn with_ceiling(mut self, ceiling: EditCeiling) -> Self {
        self.ceiling = ceiling;
        self
    }
}
