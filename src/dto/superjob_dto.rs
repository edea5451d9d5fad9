use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::deserialize_amount_flexible;

/// Envelope of `GET /2.0/vacancies/`.
#[derive(Debug, Clone, Deserialize)]
pub struct SuperJobPage {
    pub objects: Vec<JsonValue>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuperJobVacancy {
    pub firm_name: String,
    pub profession: String,
    pub link: String,
    #[serde(default, deserialize_with = "deserialize_amount_flexible")]
    pub payment_from: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_amount_flexible")]
    pub payment_to: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
}
