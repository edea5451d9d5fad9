use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::deserialize_amount_flexible;

/// Envelope of `GET /vacancies`.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadHunterPage {
    pub items: Vec<JsonValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadHunterVacancy {
    pub employer: HeadHunterEmployer,
    pub name: String,
    pub alternate_url: String,
    #[serde(default)]
    pub salary: Option<HeadHunterSalary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadHunterEmployer {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadHunterSalary {
    #[serde(default, deserialize_with = "deserialize_amount_flexible")]
    pub from: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_amount_flexible")]
    pub to: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
}
