use crate::utils::error::{PairSumError, Result};

/// Parses a whitespace-separated list of integers. At least one is required.
pub fn parse_sequence(line: &str) -> Result<Vec<i64>> {
    let mut values = Vec::new();

    for (position, token) in line.split_whitespace().enumerate() {
        let value = token
            .parse::<i64>()
            .map_err(|_| PairSumError::InvalidListInput {
                token: token.to_string(),
                position,
            })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(PairSumError::InvalidListInput {
            token: String::new(),
            position: 0,
        });
    }

    Ok(values)
}

pub fn parse_target(line: &str) -> Result<i64> {
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| PairSumError::InvalidTargetInput {
            value: trimmed.to_string(),
        })
}
