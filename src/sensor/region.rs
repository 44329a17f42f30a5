use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TelemetryError;

/// Body region covered by the skin patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
}

impl Region {
    /// Display order used by the dashboard and the spotlight cycle.
    pub const ALL: [Region; 4] = [
        Region::RightArm,
        Region::LeftArm,
        Region::RightLeg,
        Region::LeftLeg,
    ];

    /// Position in display order.
    pub fn index(self) -> usize {
        match self {
            Region::RightArm => 0,
            Region::LeftArm => 1,
            Region::RightLeg => 2,
            Region::LeftLeg => 3,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Region::RightArm => "right-arm",
            Region::LeftArm => "left-arm",
            Region::RightLeg => "right-leg",
            Region::LeftLeg => "left-leg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Region::RightArm => "Right Arm",
            Region::LeftArm => "Left Arm",
            Region::RightLeg => "Right Leg",
            Region::LeftLeg => "Left Leg",
        }
    }

    /// Region following `self` in display order, wrapping around.
    pub fn next(self) -> Region {
        Region::ALL[(self.index() + 1) % Region::ALL.len()]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Region {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.id() == s)
            .ok_or_else(|| TelemetryError::UnknownRegion(s.to_string()))
    }
}
