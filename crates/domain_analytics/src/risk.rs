//! Risk classification
//!
//! Two signals decide the tier: the historical loss ratio and the average
//! number of claims per year. The overall tier is the more severe of the
//! two. The trend (trailing twelve months against the whole history) is
//! reported next to the tier but never moves it, so the tier only ever
//! rises with the loss ratio.
//!
//! Reasons are returned as codes with parameters. Turning them into text is
//! left to the presentation layer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::metrics::{claims_per_year, CustomerMetrics};
use crate::timeseries::YearRow;

/// Risk tier, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    #[serde(rename = "lav")]
    Low,
    #[serde(rename = "moderat")]
    Moderate,
    #[serde(rename = "høy")]
    High,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "lav",
            RiskTier::Moderate => "moderat",
            RiskTier::High => "høy",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of the loss ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    SharplyDeteriorating,
    Deteriorating,
    Stable,
    Improving,
    /// No historical loss ratio to compare with
    InsufficientData,
}

/// Classification thresholds, all in the unit of the signal they bound
///
/// Loss ratios are in percent, frequencies in claims per year. A signal at
/// or above a threshold reaches that tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub loss_ratio_high: Decimal,
    pub loss_ratio_moderate: Decimal,
    pub frequency_high: Decimal,
    pub frequency_moderate: Decimal,
}

/// Factor bounds for one tier
struct TrendBounds {
    sharply_deteriorating: Option<Decimal>,
    deteriorating: Decimal,
    improving: Decimal,
}

impl TrendBounds {
    fn for_tier(tier: RiskTier) -> Self {
        match tier {
            RiskTier::Moderate => Self {
                sharply_deteriorating: Some(dec!(2.0)),
                deteriorating: dec!(1.5),
                improving: dec!(0.5),
            },
            RiskTier::High | RiskTier::Low => Self {
                sharply_deteriorating: None,
                deteriorating: dec!(1.5),
                improving: dec!(0.7),
            },
        }
    }

    fn classify(&self, factor: Decimal) -> Trend {
        if self.sharply_deteriorating.is_some_and(|bound| factor > bound) {
            Trend::SharplyDeteriorating
        } else if factor > self.deteriorating {
            Trend::Deteriorating
        } else if factor < self.improving {
            Trend::Improving
        } else {
            Trend::Stable
        }
    }
}

/// Why a customer was put in a tier, in the order the reasons apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum RiskReason {
    HighLossRatio { loss_ratio_percent: Decimal, threshold: Decimal },
    ModerateLossRatio { loss_ratio_percent: Decimal, threshold: Decimal },
    LowLossRatio { loss_ratio_percent: Decimal },
    HighClaimFrequency { claims_per_year: Decimal, threshold: Decimal },
    ModerateClaimFrequency { claims_per_year: Decimal, threshold: Decimal },
    SharplyDeterioratingTrend { factor: Decimal },
    DeterioratingTrend { factor: Decimal },
    ImprovingTrend { factor: Decimal },
    InsufficientTrendData,
}

impl RiskReason {
    /// Stable code used as message key
    pub fn code(&self) -> &'static str {
        match self {
            RiskReason::HighLossRatio { .. } => "high_loss_ratio",
            RiskReason::ModerateLossRatio { .. } => "moderate_loss_ratio",
            RiskReason::LowLossRatio { .. } => "low_loss_ratio",
            RiskReason::HighClaimFrequency { .. } => "high_claim_frequency",
            RiskReason::ModerateClaimFrequency { .. } => "moderate_claim_frequency",
            RiskReason::SharplyDeterioratingTrend { .. } => "sharply_deteriorating_trend",
            RiskReason::DeterioratingTrend { .. } => "deteriorating_trend",
            RiskReason::ImprovingTrend { .. } => "improving_trend",
            RiskReason::InsufficientTrendData => "insufficient_trend_data",
        }
    }
}

/// Signals the classifier reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskInputs {
    pub historical_loss_ratio: Decimal,
    pub current_loss_ratio: Decimal,
    pub claims_per_year: Decimal,
}

impl RiskInputs {
    pub fn from_metrics(metrics: &CustomerMetrics, series: &[YearRow]) -> Self {
        Self {
            historical_loss_ratio: metrics.historical.loss_ratio_percent,
            current_loss_ratio: metrics.current_12mo.loss_ratio_percent,
            claims_per_year: claims_per_year(series),
        }
    }

    /// Current over historical loss ratio, `None` without history
    pub fn trend_factor(&self) -> Option<Decimal> {
        if self.historical_loss_ratio.is_zero() {
            return None;
        }
        let factor = self
            .current_loss_ratio
            .checked_div(self.historical_loss_ratio)
            .unwrap_or_else(|| {
                if self.current_loss_ratio.is_sign_negative() == self.historical_loss_ratio.is_sign_negative() {
                    Decimal::MAX
                } else {
                    Decimal::MIN
                }
            });
        Some(factor.round_dp(2))
    }
}

/// Result of classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    pub loss_ratio_tier: RiskTier,
    pub frequency_tier: RiskTier,
    pub trend: Trend,
    pub trend_factor: Option<Decimal>,
    pub reasons: Vec<RiskReason>,
}

/// Maps risk signals to a tier
#[derive(Debug, Clone, Copy)]
pub struct RiskClassifier {
    thresholds: RiskThresholds,
}

impl RiskClassifier {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    pub fn classify(&self, inputs: &RiskInputs) -> RiskAssessment {
        let t = &self.thresholds;
        let mut reasons = Vec::new();

        let loss_ratio = inputs.historical_loss_ratio;
        let loss_ratio_tier = if loss_ratio >= t.loss_ratio_high {
            reasons.push(RiskReason::HighLossRatio {
                loss_ratio_percent: loss_ratio,
                threshold: t.loss_ratio_high,
            });
            RiskTier::High
        } else if loss_ratio >= t.loss_ratio_moderate {
            reasons.push(RiskReason::ModerateLossRatio {
                loss_ratio_percent: loss_ratio,
                threshold: t.loss_ratio_moderate,
            });
            RiskTier::Moderate
        } else {
            reasons.push(RiskReason::LowLossRatio {
                loss_ratio_percent: loss_ratio,
            });
            RiskTier::Low
        };

        let frequency = inputs.claims_per_year;
        let frequency_tier = if frequency >= t.frequency_high {
            reasons.push(RiskReason::HighClaimFrequency {
                claims_per_year: frequency,
                threshold: t.frequency_high,
            });
            RiskTier::High
        } else if frequency >= t.frequency_moderate {
            reasons.push(RiskReason::ModerateClaimFrequency {
                claims_per_year: frequency,
                threshold: t.frequency_moderate,
            });
            RiskTier::Moderate
        } else {
            RiskTier::Low
        };

        let tier = loss_ratio_tier.max(frequency_tier);

        let trend_factor = inputs.trend_factor();
        let trend = match trend_factor {
            Some(factor) => TrendBounds::for_tier(tier).classify(factor),
            None => Trend::InsufficientData,
        };
        match (trend, trend_factor) {
            (Trend::SharplyDeteriorating, Some(factor)) => {
                reasons.push(RiskReason::SharplyDeterioratingTrend { factor })
            }
            (Trend::Deteriorating, Some(factor)) => reasons.push(RiskReason::DeterioratingTrend { factor }),
            (Trend::Improving, Some(factor)) => reasons.push(RiskReason::ImprovingTrend { factor }),
            (Trend::InsufficientData, _) => reasons.push(RiskReason::InsufficientTrendData),
            _ => {}
        }

        RiskAssessment {
            tier,
            loss_ratio_tier,
            frequency_tier,
            trend,
            trend_factor,
            reasons,
        }
    }
}
