use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Responsive preview width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Viewport {
    pub const ALL: [Viewport; 3] = [Viewport::Desktop, Viewport::Tablet, Viewport::Mobile];

    /// Upper bound on grid columns at this width
    pub fn max_columns(&self) -> usize {
        match self {
            Viewport::Desktop => 4,
            Viewport::Tablet => 2,
            Viewport::Mobile => 1,
        }
    }

    /// Preview frame width in CSS pixels
    pub fn width_px(&self) -> u32 {
        match self {
            Viewport::Desktop => 1280,
            Viewport::Tablet => 768,
            Viewport::Mobile => 375,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Viewport::Desktop => "desktop",
            Viewport::Tablet => "tablet",
            Viewport::Mobile => "mobile",
        }
    }
}

impl FromStr for Viewport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(Viewport::Desktop),
            "tablet" => Ok(Viewport::Tablet),
            "mobile" => Ok(Viewport::Mobile),
            other => Err(format!(
                "Invalid viewport: {}. Use: mobile, tablet, or desktop",
                other
            )),
        }
    }
}
