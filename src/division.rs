use crate::optional::Optional;

/// Integer division that turns an undefined quotient into absence.
///
/// Both a zero divisor and an overflowing quotient (`i64::MIN / -1`)
/// yield [`Optional::Empty`].
pub fn guarded_div(dividend: i64, divisor: i64) -> Optional<i64> {
    dividend.checked_div(divisor).into()
}
