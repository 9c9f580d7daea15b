//! Norwegian explanations for risk reasons
//!
//! The classifier returns reason codes with parameters; the texts live in
//! `locales/nb-NO/analytics.ftl` and are rendered with Fluent. A bundle is
//! built per use, since `FluentBundle` is not `Sync`.

use fluent::{FluentArgs, FluentBundle, FluentResource};
use rust_decimal::Decimal;
use thiserror::Error;
use unic_langid::{langid, LanguageIdentifier};

use domain_analytics::RiskReason;

const NB_NO: LanguageIdentifier = langid!("nb-NO");
const ANALYTICS_FTL: &str = include_str!("../locales/nb-NO/analytics.ftl");

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Message resource does not parse: {0}")]
    Parse(String),

    #[error("Message resource could not be added: {0}")]
    Resource(String),
}

/// Renders reason codes as Norwegian sentences
pub struct ReasonFormatter {
    bundle: FluentBundle<FluentResource>,
}

impl ReasonFormatter {
    /// Formatter for Norwegian Bokmål
    pub fn norwegian() -> Result<Self, I18nError> {
        let resource = FluentResource::try_new(ANALYTICS_FTL.to_string())
            .map_err(|(_, errors)| I18nError::Parse(format!("{:?}", errors)))?;

        let mut bundle = FluentBundle::new(vec![NB_NO]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| I18nError::Resource(format!("{:?}", errors)))?;

        Ok(Self { bundle })
    }

    /// Renders one reason; an unknown code renders as the code itself
    pub fn format(&self, reason: &RiskReason) -> String {
        let code = reason.code();
        let Some(pattern) = self.bundle.get_message(code).and_then(|m| m.value()) else {
            tracing::warn!(code, "no message for risk reason");
            return code.to_string();
        };

        let args = arguments(reason);
        let mut errors = vec![];
        let text = self.bundle.format_pattern(pattern, Some(&args), &mut errors);
        if !errors.is_empty() {
            tracing::warn!(code, ?errors, "risk reason formatted with errors");
        }
        text.into_owned()
    }

    pub fn format_all(&self, reasons: &[RiskReason]) -> Vec<String> {
        reasons.iter().map(|r| self.format(r)).collect()
    }
}

fn arguments(reason: &RiskReason) -> FluentArgs<'static> {
    let mut args = FluentArgs::new();
    match reason {
        RiskReason::HighLossRatio { loss_ratio_percent, threshold }
        | RiskReason::ModerateLossRatio { loss_ratio_percent, threshold } => {
            args.set("loss_ratio", number(*loss_ratio_percent));
            args.set("threshold", number(*threshold));
        }
        RiskReason::LowLossRatio { loss_ratio_percent } => {
            args.set("loss_ratio", number(*loss_ratio_percent));
        }
        RiskReason::HighClaimFrequency { claims_per_year, threshold }
        | RiskReason::ModerateClaimFrequency { claims_per_year, threshold } => {
            args.set("claims_per_year", number(*claims_per_year));
            args.set("threshold", number(*threshold));
        }
        RiskReason::SharplyDeterioratingTrend { factor }
        | RiskReason::DeterioratingTrend { factor }
        | RiskReason::ImprovingTrend { factor } => {
            args.set("factor", number(*factor));
        }
        RiskReason::InsufficientTrendData => {}
    }
    args
}

/// Norwegian number text: decimal comma, no trailing zeros
fn number(value: Decimal) -> String {
    value.normalize().to_string().replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_number_uses_decimal_comma() {
        assert_eq!(number(dec!(33.70)), "33,7");
        assert_eq!(number(dec!(70)), "70");
        assert_eq!(number(dec!(2.14)), "2,14");
    }

    #[test]
    fn test_formats_loss_ratio_reason() {
        let formatter = ReasonFormatter::norwegian().unwrap();
        let text = formatter.format(&RiskReason::HighLossRatio {
            loss_ratio_percent: dec!(82.5),
            threshold: dec!(70),
        });
        assert_eq!(text, "Skadeprosent på 82,5 % er over grensen for høy risiko (70 %).");
    }

    #[test]
    fn test_every_reason_has_a_message() {
        let formatter = ReasonFormatter::norwegian().unwrap();
        let reasons = [
            RiskReason::HighLossRatio { loss_ratio_percent: dec!(1), threshold: dec!(1) },
            RiskReason::ModerateLossRatio { loss_ratio_percent: dec!(1), threshold: dec!(1) },
            RiskReason::LowLossRatio { loss_ratio_percent: dec!(1) },
            RiskReason::HighClaimFrequency { claims_per_year: dec!(1), threshold: dec!(1) },
            RiskReason::ModerateClaimFrequency { claims_per_year: dec!(1), threshold: dec!(1) },
            RiskReason::SharplyDeterioratingTrend { factor: dec!(1) },
            RiskReason::DeterioratingTrend { factor: dec!(1) },
            RiskReason::ImprovingTrend { factor: dec!(1) },
            RiskReason::InsufficientTrendData,
        ];

        for (reason, text) in reasons.iter().zip(formatter.format_all(&reasons)) {
            assert_ne!(text, reason.code(), "missing message for {}", reason.code());
            assert!(!text.contains('{'), "unresolved placeable in {}", text);
        }
    }
}
