use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid price value: {0}")]
    InvalidPrice(String),
}

/// The cache only requires a non-empty mint address; it does not validate
/// field semantics beyond that.
pub fn validate_mint_address(mint: &str) -> Result<(), ValidationError> {
    if mint.trim().is_empty() {
        return Err(ValidationError::MissingParameter("mint".to_string()));
    }
    Ok(())
}

/// Prices must be finite and non-negative.
pub fn validate_price(price: f64) -> Result<f64, ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice(price.to_string()));
    }
    Ok(price)
}
