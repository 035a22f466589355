use rust_decimal::Decimal;

/// VAT contained in a gross (VAT-inclusive) amount.
///
/// `percentage` is the VAT rate in percent. Non-positive rates contain no VAT.
pub fn vat_from_gross(
    gross_amount: Decimal,
    percentage: Decimal,
) -> Decimal {
    if percentage <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    gross_amount * percentage / (Decimal::ONE_HUNDRED + percentage)
}

/// VAT payable to the tax office; negative means a refund.
pub fn net_vat_position(
    vat_due: Decimal,
    vat_reclaimable: Decimal,
) -> Decimal {
    vat_due - vat_reclaimable
}
