/// Blocks between subsidy halvings.
pub const HALVING_INTERVAL: u64 = 210_000;
/// Width of the window after each halving that still counts as that era.
pub const ERA_WINDOW: u64 = 1_000;
/// Heights above this (outside any halving window) are the modern era.
pub const MODERN_ERA_START: u64 = 800_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    Genesis,
    FirstHalving,
    SecondHalving,
    ThirdHalving,
    FourthHalving,
    Modern,
}

/// Halving windows in check order.
const WINDOWS: [(u64, Era); 5] = [
    (0, Era::Genesis),
    (HALVING_INTERVAL, Era::FirstHalving),
    (2 * HALVING_INTERVAL, Era::SecondHalving),
    (3 * HALVING_INTERVAL, Era::ThirdHalving),
    (4 * HALVING_INTERVAL, Era::FourthHalving),
];

impl Era {
    /// Classify a block height. Halving windows take precedence over the modern catch-all.
    #[must_use]
    pub fn from_height(height: u64) -> Option<Self> {
        WINDOWS
            .iter()
            .find(|(start, _)| (*start..start + ERA_WINDOW).contains(&height))
            .map(|&(_, era)| era)
            .or_else(|| (height > MODERN_ERA_START).then_some(Self::Modern))
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Genesis => "genesis era",
            Self::FirstHalving => "first halving",
            Self::SecondHalving => "second halving",
            Self::ThirdHalving => "third halving",
            Self::FourthHalving => "fourth halving",
            Self::Modern => "modern era",
        }
    }
}

impl core::fmt::Display for Era {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of halvings that happened at or before `height`.
#[inline]
#[must_use]
pub const fn halving_epoch(height: u64) -> u64 {
    height / HALVING_INTERVAL
}
