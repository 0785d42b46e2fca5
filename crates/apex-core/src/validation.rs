//! # Validation Module
//!
//! Form-level rules an invoice must pass before it is finalized.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Draft editing                                                │
//! │  └── negative rate / quantity refused on update                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Finalize (THIS MODULE)                                       │
//! │  ├── invoice number present, digits only                               │
//! │  ├── customer name and address present                                 │
//! │  └── every line: description, rate > 0, quantity > 0                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Calculator: never validates, always computes                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are checked in the order the form shows them and the first
//! failure is reported, so the user fixes one field at a time.
//!
//! ## Usage
//! ```rust
//! use apex_core::validation::validate_invoice_number;
//!
//! assert!(validate_invoice_number("022").is_ok());
//! assert!(validate_invoice_number("AS-22").is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::types::{Customer, GstRates, LineItem};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Header Validators
// =============================================================================

/// Validates the invoice number.
///
/// ## Rules
/// - Must not be empty
/// - Digits only (the prefix and financial year are added when printing)
pub fn validate_invoice_number(number: &str) -> ValidationResult<()> {
    let number = number.trim();

    if number.is_empty() {
        return Err(ValidationError::Required {
            field: "invoice number".to_string(),
        });
    }

    if !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "invoice number".to_string(),
            reason: "must contain only digits (e.g. 022)".to_string(),
        });
    }

    Ok(())
}

/// Validates the billed customer.
///
/// ## Rules
/// - Company name must not be empty
/// - First address line must not be empty
pub fn validate_customer(customer: &Customer) -> ValidationResult<()> {
    if customer.company_name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "customer company name".to_string(),
        });
    }

    if customer.address_line1.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "customer address".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Line Item Validators
// =============================================================================

/// Validates one line item for finalizing.
///
/// Errors name the row by its serial number ("rate for item 2").
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    let serial = item.serial_number;

    if item.description.trim().is_empty() {
        return Err(ValidationError::Required {
            field: format!("description for item {}", serial),
        });
    }

    if item.rate() <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: format!("rate for item {}", serial),
        });
    }

    if item.quantity() <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: format!("quantity for item {}", serial),
        });
    }

    Ok(())
}

/// Validates the full item list: non-empty, then each row in order.
pub fn validate_line_items(items: &[LineItem]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::Empty {
            field: "line items".to_string(),
        });
    }

    items.iter().try_for_each(validate_line_item)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a rate, quantity or percentage entered on the form.
///
/// ## Rules
/// - Zero is allowed (a freshly added row is all zeros)
/// - Negative values are refused
pub fn validate_non_negative(field: &str, value: Decimal) -> ValidationResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates both GST percentages: zero or greater, no upper cap.
pub fn validate_gst_rates(rates: &GstRates) -> ValidationResult<()> {
    validate_non_negative("CGST percentage", rates.cgst_percentage)?;
    validate_non_negative("SGST percentage", rates.sgst_percentage)
}

/// Validates the pricing of a stored row: rate and quantity may be zero
/// but never negative.
pub fn validate_line_item_pricing(item: &LineItem) -> ValidationResult<()> {
    let serial = item.serial_number;
    validate_non_negative(&format!("rate for item {}", serial), item.rate())?;
    validate_non_negative(&format!("quantity for item {}", serial), item.quantity())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn priced(serial: u32) -> LineItem {
        LineItem::new(format!("id-{}", serial), serial)
            .with_description("Solar PV system")
            .with_pricing(dec!(45.5), dec!(3.3))
    }

    #[test]
    fn test_validate_invoice_number() {
        assert!(validate_invoice_number("022").is_ok());
        assert!(validate_invoice_number(" 7 ").is_ok());

        assert_eq!(
            validate_invoice_number("  "),
            Err(ValidationError::Required {
                field: "invoice number".to_string()
            })
        );
        assert!(matches!(
            validate_invoice_number("22A"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_customer() {
        let mut customer = Customer::default();
        assert!(validate_customer(&customer)
            .unwrap_err()
            .to_string()
            .contains("company name"));

        customer.company_name = "Sunrise Agro".to_string();
        assert!(validate_customer(&customer)
            .unwrap_err()
            .to_string()
            .contains("address"));

        customer.address_line1 = "12 Lake Road".to_string();
        assert!(validate_customer(&customer).is_ok());
    }

    #[test]
    fn test_validate_line_item() {
        assert!(validate_line_item(&priced(1)).is_ok());

        let blank = LineItem::new("x", 3);
        assert_eq!(
            validate_line_item(&blank).unwrap_err().to_string(),
            "description for item 3 is required"
        );

        let no_rate = LineItem::new("x", 2)
            .with_description("Inverter")
            .with_pricing(Decimal::ZERO, dec!(1));
        assert_eq!(
            validate_line_item(&no_rate).unwrap_err().to_string(),
            "rate for item 2 must be positive"
        );

        let no_quantity = LineItem::new("x", 4)
            .with_description("Inverter")
            .with_pricing(dec!(1), Decimal::ZERO);
        assert_eq!(
            validate_line_item(&no_quantity).unwrap_err().to_string(),
            "quantity for item 4 must be positive"
        );
    }

    #[test]
    fn test_validate_line_items_reports_first_failure() {
        assert!(matches!(
            validate_line_items(&[]),
            Err(ValidationError::Empty { .. })
        ));

        let items = vec![priced(1), LineItem::new("b", 2), LineItem::new("c", 3)];
        assert_eq!(
            validate_line_items(&items).unwrap_err().to_string(),
            "description for item 2 is required"
        );
    }

    #[test]
    fn test_validate_gst_rates() {
        assert!(validate_gst_rates(&GstRates::default()).is_ok());
        assert!(validate_gst_rates(&GstRates::zero()).is_ok());
        assert!(validate_gst_rates(&GstRates::new(dec!(150), dec!(0))).is_ok());

        assert_eq!(
            validate_gst_rates(&GstRates::new(dec!(9), dec!(-9)))
                .unwrap_err()
                .to_string(),
            "SGST percentage must not be negative"
        );
    }

    #[test]
    fn test_validate_line_item_pricing() {
        assert!(validate_line_item_pricing(&LineItem::new("x", 1)).is_ok());

        let negative = LineItem::new("x", 2).with_pricing(dec!(-1.5), dec!(35));
        assert_eq!(
            validate_line_item_pricing(&negative).unwrap_err().to_string(),
            "rate for item 2 must not be negative"
        );
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("rate", Decimal::ZERO).is_ok());
        assert!(validate_non_negative("rate", dec!(0.001)).is_ok());
        assert!(validate_non_negative("rate", dec!(-0.001)).is_err());
    }
}
