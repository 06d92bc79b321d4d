//! Bounds on monetary amounts.
//!
//! Wages and payments are capped well below `Decimal::MAX` so that summing a
//! workforce's month can never overflow.

use rust_decimal::Decimal;

use crate::error::{TrackerError, TrackerResult};

/// Largest accepted daily wage or single payment.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

fn invalid(field: &str, amount: Decimal, message: String) -> TrackerError {
    TrackerError::InvalidAmount {
        field: field.to_string(),
        amount: amount.to_string(),
        message,
    }
}

/// Checks a daily wage: zero up to [`MAX_AMOUNT`].
///
/// # Example
///
/// ```
/// use wage_tracker::models::{MAX_AMOUNT, validate_wage};
/// use rust_decimal::Decimal;
///
/// assert!(validate_wage(Decimal::ZERO).is_ok());
/// assert!(validate_wage(MAX_AMOUNT + Decimal::ONE).is_err());
/// ```
pub fn validate_wage(wage: Decimal) -> TrackerResult<()> {
    if wage < Decimal::ZERO {
        return Err(invalid("wage", wage, "must not be negative".to_string()));
    }
    if wage > MAX_AMOUNT {
        return Err(invalid("wage", wage, format!("must not exceed {}", MAX_AMOUNT)));
    }
    Ok(())
}

/// Checks a payment: greater than zero, up to [`MAX_AMOUNT`].
pub fn validate_payment(amount: Decimal) -> TrackerResult<()> {
    if amount <= Decimal::ZERO {
        return Err(invalid(
            "payment",
            amount,
            "must be greater than zero".to_string(),
        ));
    }
    if amount > MAX_AMOUNT {
        return Err(invalid(
            "payment",
            amount,
            format!("must not exceed {}", MAX_AMOUNT),
        ));
    }
    Ok(())
}
