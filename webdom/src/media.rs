use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named viewport width buckets, narrowest to widest.
///
/// The buckets tile the whole pixel axis: every width falls in exactly one.
/// The derived ordering follows declaration order, which equals the ordering
/// of the buckets' lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Lo,
    Sl,
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// All buckets in ascending width order.
    pub const ALL: [Breakpoint; 7] = [
        Breakpoint::Lo,
        Breakpoint::Sl,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// Inclusive pixel range covered by this bucket.
    pub const fn range(self) -> (u32, u32) {
        match self {
            Breakpoint::Lo => (0, 359),
            Breakpoint::Sl => (360, 639),
            Breakpoint::Sm => (640, 767),
            Breakpoint::Md => (768, 1023),
            Breakpoint::Lg => (1024, 1279),
            Breakpoint::Xl => (1280, 1535),
            Breakpoint::Xxl => (1536, u32::MAX),
        }
    }

    /// Lower bound of this bucket in pixels.
    pub const fn min_width(self) -> u32 {
        self.range().0
    }

    /// The bucket a viewport width falls into.
    pub fn for_width(width: u32) -> Breakpoint {
        for bp in Breakpoint::ALL {
            let (min, max) = bp.range();
            if width >= min && width <= max {
                return bp;
            }
        }
        Breakpoint::Lo
    }

    /// True for buckets below the tablet threshold.
    pub fn is_mobile(self) -> bool {
        self < Breakpoint::Md
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Breakpoint::Lo => "lo",
            Breakpoint::Sl => "sl",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        };
        write!(f, "{}", name)
    }
}

/// Error returned when a breakpoint name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown breakpoint name: {0:?}")]
pub struct ParseBreakpointError(pub String);

impl FromStr for Breakpoint {
    type Err = ParseBreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lo" => Ok(Breakpoint::Lo),
            "sl" => Ok(Breakpoint::Sl),
            "sm" => Ok(Breakpoint::Sm),
            "md" => Ok(Breakpoint::Md),
            "lg" => Ok(Breakpoint::Lg),
            "xl" => Ok(Breakpoint::Xl),
            "2xl" => Ok(Breakpoint::Xxl),
            _ => Err(ParseBreakpointError(s.to_string())),
        }
    }
}
