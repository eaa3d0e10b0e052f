//! Store purchase rules.

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Total cost of a purchase line.
pub fn total_cost(unit_cost: Decimal, quantity: i32) -> Decimal {
    unit_cost * Decimal::from(quantity)
}

/// Quantity must be at least one.
pub fn validate_quantity(quantity: i32) -> Result<(), CoreError> {
    if quantity < 1 {
        return Err(CoreError::Validation(
            "Quantity must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Reject a purchase the balance cannot cover. The caller leaves balance
/// and stats untouched on failure.
pub fn validate_balance(balance: Decimal, cost: Decimal) -> Result<(), CoreError> {
    if balance < cost {
        return Err(CoreError::Validation("Insufficient balance".to_string()));
    }
    Ok(())
}
