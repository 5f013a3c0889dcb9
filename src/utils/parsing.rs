use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error naming the first token that does not parse as an `f64`.
pub fn parse_numbers<I, S>(tokens: I) -> Result<Vec<f64>, UtilsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| {
            let token = token.as_ref();
            let trimmed = token.trim();
            match trimmed.parse::<f64>() {
                Ok(value) => {
                    debug!("Parsed '{}' as {}", trimmed, value);
                    Ok(value)
                }
                Err(_) => {
                    warn!("Token is not a number: '{}'", token);
                    Err(UtilsError::InvalidNumber(token.to_string()))
                }
            }
        })
        .collect()
}
