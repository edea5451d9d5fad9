pub mod headhunter_dto;
pub mod superjob_dto;

use serde::{Deserialize, Deserializer};

/// Salary amounts arrive as integers, floats, numeric strings or null
/// depending on the provider and the listing. Only whole non-negative
/// amounts are accepted; fractional ones are an error, never rounded.
pub(crate) fn deserialize_amount_flexible<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Int(u64),
        Float(f64),
        String(String),
    }

    let amount = match Option::<Amount>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(amount) => amount,
    };

    match amount {
        Amount::Int(value) => Ok(Some(value)),
        Amount::Float(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 => {
            Ok(Some(value as u64))
        }
        Amount::Float(value) => Err(serde::de::Error::custom(format!(
            "Invalid salary amount: {}",
            value
        ))),
        Amount::String(s) if s.trim().is_empty() => Ok(None),
        Amount::String(s) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("Invalid salary amount: {}", s))),
    }
}
