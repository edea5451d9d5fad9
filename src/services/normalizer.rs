//! Pure mapping from raw provider items to the canonical [`Vacancy`].

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::dto::headhunter_dto::HeadHunterVacancy;
use crate::dto::superjob_dto::SuperJobVacancy;
use crate::error::{Error, Result};
use crate::models::vacancy::{ProviderKind, Vacancy};

/// Canonical code used when SuperJob sends a currency we do not know.
pub const PRIMARY_CURRENCY: &str = "RUR";

const SUPERJOB_CURRENCIES: &[(&str, &str)] = &[("rub", "RUR"), ("uah", "UAH"), ("uzs", "UZS")];

pub fn normalize(provider: ProviderKind, item: &JsonValue) -> Result<Vacancy> {
    match provider {
        ProviderKind::HeadHunter => parse_raw::<HeadHunterVacancy>(provider, item).map(from_headhunter),
        ProviderKind::SuperJob => parse_raw::<SuperJobVacancy>(provider, item).map(from_superjob),
    }
}

fn parse_raw<T: DeserializeOwned>(provider: ProviderKind, item: &JsonValue) -> Result<T> {
    serde_json::from_value::<T>(item.clone()).map_err(|e| Error::Normalization {
        provider,
        reason: e.to_string(),
    })
}

pub fn from_headhunter(raw: HeadHunterVacancy) -> Vacancy {
    let (salary_from, salary_to, currency) = match raw.salary {
        Some(salary) => (salary.from, salary.to, salary.currency),
        None => (None, None, None),
    };

    Vacancy {
        employer: raw.employer.name,
        title: raw.name,
        url: raw.alternate_url,
        api: ProviderKind::HeadHunter,
        salary_from,
        salary_to,
        currency,
    }
}

pub fn from_superjob(raw: SuperJobVacancy) -> Vacancy {
    Vacancy {
        employer: raw.firm_name,
        title: raw.profession,
        url: raw.link,
        api: ProviderKind::SuperJob,
        salary_from: raw.payment_from.filter(|amount| *amount != 0),
        salary_to: raw.payment_to.filter(|amount| *amount != 0),
        currency: superjob_currency(raw.currency.as_deref()),
    }
}

fn superjob_currency(code: Option<&str>) -> Option<String> {
    let code = code.map(str::trim).filter(|c| !c.is_empty())?;
    let canonical = SUPERJOB_CURRENCIES
        .iter()
        .find(|(sj, _)| sj.eq_ignore_ascii_case(code))
        .map(|(_, canonical)| *canonical)
        .unwrap_or(PRIMARY_CURRENCY);
    Some(canonical.to_string())
}
