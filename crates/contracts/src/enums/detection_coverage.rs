use serde::{Deserialize, Serialize};

/// Detection coverage bucket of an ATT&CK technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionCoverage {
    None,
    Partial,
    Good,
    Excellent,
}

impl DetectionCoverage {
    pub fn code(&self) -> &'static str {
        match self {
            DetectionCoverage::None => "none",
            DetectionCoverage::Partial => "partial",
            DetectionCoverage::Good => "good",
            DetectionCoverage::Excellent => "excellent",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DetectionCoverage::None => "None",
            DetectionCoverage::Partial => "Partial",
            DetectionCoverage::Good => "Good",
            DetectionCoverage::Excellent => "Excellent",
        }
    }

    /// Legend text including the score band
    pub fn legend(&self) -> &'static str {
        match self {
            DetectionCoverage::None => "None (<40%)",
            DetectionCoverage::Partial => "Partial (40-70%)",
            DetectionCoverage::Good => "Good (70-90%)",
            DetectionCoverage::Excellent => "Excellent (90%+)",
        }
    }

    /// Chart colour (hex)
    pub fn color(&self) -> &'static str {
        match self {
            DetectionCoverage::None => "#dc2626",
            DetectionCoverage::Partial => "#f59e0b",
            DetectionCoverage::Good => "#3b82f6",
            DetectionCoverage::Excellent => "#22c55e",
        }
    }

    /// Best coverage first, as shown in legends and distribution charts
    pub fn all() -> [DetectionCoverage; 4] {
        [
            DetectionCoverage::Excellent,
            DetectionCoverage::Good,
            DetectionCoverage::Partial,
            DetectionCoverage::None,
        ]
    }
}
