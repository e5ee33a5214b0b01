//! Field constraints and validation functions for products and categories.
//!
//! The store enforces identity and referential integrity; everything else a
//! request body can get wrong is checked here before a query is issued.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a product or category name in characters.
pub const MAX_NAME_LENGTH: usize = 120;

/// Maximum length of a product or category description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1_000;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a name: must contain non-whitespace and stay within the length limit.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "Name exceeds maximum length of {MAX_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an optional description against the length limit.
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(format!(
            "Description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a price: must be a finite, non-negative number.
pub fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() {
        return Err("Price must be a finite number".to_string());
    }
    if price < 0.0 {
        return Err(format!("Price must be non-negative, got {price}"));
    }
    Ok(())
}

/// Validate a stock count: must be non-negative.
pub fn validate_stock(stock: i32) -> Result<(), String> {
    if stock < 0 {
        return Err(format!("Stock must be non-negative, got {stock}"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_name -------------------------------------------------------

    #[test]
    fn valid_name_accepted() {
        assert!(validate_name("Espresso beans").is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let result = validate_name("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot be empty"));
    }

    #[test]
    fn whitespace_only_name_rejected() {
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn name_at_limit_accepted() {
        let name = "a".repeat(MAX_NAME_LENGTH);
        assert!(validate_name(&name).is_ok());
    }

    #[test]
    fn name_over_limit_rejected() {
        let name = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_name(&name).unwrap_err().contains("maximum length"));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let name = "é".repeat(MAX_NAME_LENGTH);
        assert!(validate_name(&name).is_ok());
    }

    // -- validate_description ------------------------------------------------

    #[test]
    fn empty_description_accepted() {
        assert!(validate_description("").is_ok());
    }

    #[test]
    fn long_description_rejected() {
        let text = "x".repeat(MAX_DESCRIPTION_LENGTH + 1);
        assert!(validate_description(&text).is_err());
    }

    // -- validate_price ------------------------------------------------------

    #[test]
    fn zero_price_accepted() {
        assert!(validate_price(0.0).is_ok());
    }

    #[test]
    fn negative_price_rejected() {
        assert!(validate_price(-0.01).unwrap_err().contains("non-negative"));
    }

    #[test]
    fn nan_and_infinite_price_rejected() {
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    // -- validate_stock ------------------------------------------------------

    #[test]
    fn stock_bounds() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(250).is_ok());
        assert!(validate_stock(-1).is_err());
    }
}
