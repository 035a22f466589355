use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::{format_euro, format_euro_exact};
use crate::{KorStatus, RateTable};

/// Checks yearly turnover against the small business scheme (KOR) threshold.
///
/// Turnover above the threshold forces an exit from the scheme. Turnover
/// above the warning fraction of the threshold is still eligible but comes
/// with a warning.
///
/// The opt-in state is accepted for callers that track it but does not
/// change the outcome.
pub fn check_kor_status(
    rates: &RateTable,
    yearly_turnover: Decimal,
    _is_opted_in: bool,
) -> KorStatus {
    let threshold = rates.deductions.kor_threshold;

    if yearly_turnover > threshold {
        warn!(
            turnover = %yearly_turnover,
            threshold = %threshold,
            "turnover exceeds KOR threshold"
        );
        return KorStatus {
            eligible: false,
            must_exit: true,
            warning_message: Some(format!(
                "Turnover of {} exceeds the KOR threshold of {}. You must exit KOR immediately.",
                format_euro_exact(yearly_turnover),
                format_euro(threshold)
            )),
        };
    }

    if yearly_turnover > threshold * rates.kor_warning_fraction {
        return KorStatus {
            eligible: true,
            must_exit: false,
            warning_message: Some(format!(
                "Warning: Approaching KOR limit. Current turnover: {}",
                format_euro_exact(yearly_turnover)
            )),
        };
    }

    KorStatus {
        eligible: true,
        must_exit: false,
        warning_message: None,
    }
}
