//! Parser options and recursion budgets.
//!
//! [`MatchFlags`] combines caller-visible options with three internal counters. The counters bound the work the
//! heuristic fallbacks may do on a single input: every nested call advances one of them, and once a counter reaches
//! its limit the matching option (`NO_RECURSION`, `SKIP_PARTITION_CHECK` or `NO_PER_OPERATORS`) is forced on.

use core::ops::{BitOr, BitOrAssign};

/// Number of nested heuristic passes before recursion is disabled.
pub const RECURSION_BUDGET: u8 = 6;
/// Number of nested partitioning passes before partitioning is disabled.
pub const PARTITION_BUDGET: u8 = 3;
/// Number of `per` rewrites before further ones are disabled.
pub const PER_OPERATOR_BUDGET: u8 = 3;

/// Options controlling how [`parse`](crate::parse) interprets a string.
///
/// Options combine with `|`:
///
/// ```rust
/// use units::MatchFlags;
///
/// let flags = MatchFlags::CASE_INSENSITIVE | MatchFlags::SINGLE_SLASH;
/// assert!(flags.contains(MatchFlags::SINGLE_SLASH));
/// assert!(!flags.contains(MatchFlags::NO_RECURSION));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MatchFlags {
    options: u32,
    recursion: u8,
    partition: u8,
    per_operator: u8,
}

impl MatchFlags {
    /// No options.
    pub const DEFAULT: Self = Self::from_bits(0);
    /// Fold letter case before matching.
    pub const CASE_INSENSITIVE: Self = Self::from_bits(1 << 0);
    /// Do not interpret `{...}` annotations or trailing text as commodities.
    pub const NO_COMMODITIES: Self = Self::from_bits(1 << 1);
    /// Do not rewrite "X of Y" into a commodity.
    pub const NO_OF_OPERATOR: Self = Self::from_bits(1 << 2);
    /// Do not rewrite the word `per` into a division.
    pub const NO_PER_OPERATORS: Self = Self::from_bits(1 << 3);
    /// Do not try locality qualifiers (`US`, `British`, `troy`, ...).
    pub const NO_LOCALITY_MODIFIERS: Self = Self::from_bits(1 << 4);
    /// Do not enter any recursive heuristic.
    pub const NO_RECURSION: Self = Self::from_bits(1 << 5);
    /// Everything after the first `/` is the denominator.
    pub const SINGLE_SLASH: Self = Self::from_bits(1 << 6);
    /// Skip the textual code replacements of the normalizer.
    pub const SKIP_CODE_REPLACEMENTS: Self = Self::from_bits(1 << 7);
    /// Do not try splitting merged tokens.
    pub const SKIP_PARTITION_CHECK: Self = Self::from_bits(1 << 8);
    /// Set on every nested call; not meant for callers.
    pub const NOT_FIRST_PASS: Self = Self::from_bits(1 << 9);

    const fn from_bits(options: u32) -> Self {
        Self {
            options,
            recursion: 0,
            partition: 0,
            per_operator: 0,
        }
    }

    /// `true` if every option in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.options & other.options == other.options
    }

    /// Copy with the options of `other` cleared; counters are kept.
    pub const fn without(self, other: Self) -> Self {
        Self {
            options: self.options & !other.options,
            ..self
        }
    }

    /// Copy with the options of `other` added; counters are kept.
    pub const fn with(self, other: Self) -> Self {
        Self {
            options: self.options | other.options,
            ..self
        }
    }

    /// Advance the recursion counter; exhausting it sets [`Self::NO_RECURSION`].
    pub(crate) fn recursion_step(self) -> Self {
        if self.contains(Self::NO_RECURSION) {
            return self;
        }
        let recursion = self.recursion + 1;
        let next = Self { recursion, ..self };
        if recursion >= RECURSION_BUDGET {
            log::debug!("recursion budget exhausted");
            next.with(Self::NO_RECURSION)
        } else {
            next
        }
    }

    /// Advance the partition counter; exhausting it sets [`Self::SKIP_PARTITION_CHECK`].
    pub(crate) fn partition_step(self) -> Self {
        let partition = self.partition.saturating_add(1);
        let next = Self { partition, ..self };
        if partition >= PARTITION_BUDGET {
            next.with(Self::SKIP_PARTITION_CHECK)
        } else {
            next
        }
    }

    /// Advance the `per` counter; exhausting it sets [`Self::NO_PER_OPERATORS`].
    pub(crate) fn per_operator_step(self) -> Self {
        let per_operator = self.per_operator.saturating_add(1);
        let next = Self { per_operator, ..self };
        if per_operator >= PER_OPERATOR_BUDGET {
            next.with(Self::NO_PER_OPERATORS)
        } else {
            next
        }
    }
}

impl BitOr for MatchFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

impl BitOrAssign for MatchFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.with(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_combine() {
        let f = MatchFlags::CASE_INSENSITIVE | MatchFlags::NO_COMMODITIES;
        assert!(f.contains(MatchFlags::CASE_INSENSITIVE));
        assert!(f.contains(MatchFlags::NO_COMMODITIES));
        assert!(!f.contains(MatchFlags::SINGLE_SLASH));
        assert!(!f.without(MatchFlags::CASE_INSENSITIVE).contains(MatchFlags::CASE_INSENSITIVE));
        assert!(MatchFlags::DEFAULT.contains(MatchFlags::DEFAULT));
    }

    #[test]
    fn recursion_budget_sets_no_recursion() {
        let mut f = MatchFlags::DEFAULT;
        for _ in 0..RECURSION_BUDGET - 1 {
            f = f.recursion_step();
            assert!(!f.contains(MatchFlags::NO_RECURSION));
        }
        f = f.recursion_step();
        assert!(f.contains(MatchFlags::NO_RECURSION));
        assert_eq!(f.recursion_step(), f);
    }

    #[test]
    fn partition_budget_allows_three_levels() {
        let f = MatchFlags::DEFAULT.partition_step().partition_step();
        assert!(!f.contains(MatchFlags::SKIP_PARTITION_CHECK));
        assert!(f.partition_step().contains(MatchFlags::SKIP_PARTITION_CHECK));
    }

    #[test]
    fn per_budget_sets_no_per_operators() {
        let mut f = MatchFlags::DEFAULT;
        for _ in 0..PER_OPERATOR_BUDGET {
            f = f.per_operator_step();
        }
        assert!(f.contains(MatchFlags::NO_PER_OPERATORS));
    }

    #[test]
    fn counters_survive_option_changes() {
        let f = MatchFlags::DEFAULT.partition_step().partition_step();
        let g = f.with(MatchFlags::CASE_INSENSITIVE).without(MatchFlags::CASE_INSENSITIVE);
        assert!(g.partition_step().contains(MatchFlags::SKIP_PARTITION_CHECK));
    }
}
