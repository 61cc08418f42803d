/// Severity tier of a verification status, used by the display layer to pick
/// a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTier {
    Ok,
    Warn,
    Info,
    Bad,
}

/// Presentation record for a verification status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusConfig {
    pub icon: &'static str,
    pub english_label: &'static str,
    pub description: &'static str,
    pub tier: StatusTier,
}

const VERIFIED: StatusConfig = StatusConfig {
    icon: "✔",
    english_label: "VERIFIED",
    description: "Information confirmed by reliable sources",
    tier: StatusTier::Ok,
};

const INACCURATE: StatusConfig = StatusConfig {
    icon: "!",
    english_label: "INACCURATE",
    description: "Contains correct data but also incorrect or misleading information",
    tier: StatusTier::Warn,
};

const NOT_VERIFIED: StatusConfig = StatusConfig {
    icon: "i",
    english_label: "NOT VERIFIED",
    description: "Not enough evidence to confirm or deny",
    tier: StatusTier::Info,
};

const FALSE: StatusConfig = StatusConfig {
    icon: "✘",
    english_label: "FALSE",
    description: "Clearly incorrect information",
    tier: StatusTier::Bad,
};

/// Looks up the badge for a status label, Spanish or English. Unrecognized
/// labels fall back to the Not Verified badge.
pub fn status_config(status: &str) -> StatusConfig {
    match status.trim() {
        "Verificado" | "Verified" => VERIFIED,
        "Impreciso" | "Inaccurate" => INACCURATE,
        "Falso" | "False" => FALSE,
        _ => NOT_VERIFIED,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn label(self) -> &'static str {
        match self {
            ConfidenceTier::High => "High",
            ConfidenceTier::Medium => "Medium",
            ConfidenceTier::Low => "Low",
        }
    }
}

/// Confidence tiering at the documented thresholds: >= 0.8 high, >= 0.6
/// medium, else low.
pub fn confidence_tier(confidence: f64) -> ConfidenceTier {
    if confidence >= 0.8 {
        ConfidenceTier::High
    } else if confidence >= 0.6 {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}

pub fn confidence_percent(confidence: f64) -> u8 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_and_english_labels_share_badges() {
        assert_eq!(status_config("Verificado"), status_config("Verified"));
        assert_eq!(status_config("Impreciso"), status_config("Inaccurate"));
        assert_eq!(status_config("Falso"), status_config("False"));
        assert_eq!(
            status_config("No Verificado"),
            status_config("Not Verified")
        );
    }

    #[test]
    fn unrecognized_status_falls_back_to_not_verified() {
        let config = status_config("Quantum");
        assert_eq!(config.english_label, "NOT VERIFIED");
        assert_eq!(config.tier, StatusTier::Info);
    }

    #[test]
    fn confidence_tiers_at_documented_thresholds() {
        assert_eq!(confidence_tier(0.85), ConfidenceTier::High);
        assert_eq!(confidence_tier(0.8), ConfidenceTier::High);
        assert_eq!(confidence_tier(0.65), ConfidenceTier::Medium);
        assert_eq!(confidence_tier(0.6), ConfidenceTier::Medium);
        assert_eq!(confidence_tier(0.3), ConfidenceTier::Low);
        assert_eq!(confidence_tier(0.59), ConfidenceTier::Low);
    }

    #[test]
    fn confidence_percent_rounds_and_clamps() {
        assert_eq!(confidence_percent(0.854), 85);
        assert_eq!(confidence_percent(1.7), 100);
        assert_eq!(confidence_percent(-0.2), 0);
    }
}
