use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    HeadHunter,
    SuperJob,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::HeadHunter => "HeadHunter",
            ProviderKind::SuperJob => "SuperJob",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical, provider-agnostic vacancy record. Field order is the on-disk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacancy {
    pub employer: String,
    pub title: String,
    pub url: String,
    pub api: ProviderKind,
    pub salary_from: Option<u64>,
    pub salary_to: Option<u64>,
    pub currency: Option<String>,
}

impl Vacancy {
    pub fn has_salary(&self) -> bool {
        self.salary_from.is_some() || self.salary_to.is_some()
    }

    /// Sort key: missing bounds count as zero.
    pub fn salary_key(&self) -> (u64, u64) {
        (self.salary_from.unwrap_or(0), self.salary_to.unwrap_or(0))
    }

    fn salary_text(&self) -> String {
        if !self.has_salary() {
            return "Не указана".to_string();
        }

        let mut parts = Vec::with_capacity(3);
        if let Some(from) = self.salary_from {
            parts.push(format!("от {}", from));
        }
        if let Some(to) = self.salary_to {
            parts.push(format!("до {}", to));
        }
        if let Some(currency) = self.currency.as_deref().filter(|c| !c.is_empty()) {
            parts.push(currency.to_string());
        }
        parts.join(" ")
    }
}

impl fmt::Display for Vacancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Работодатель: \"{}\"", self.employer)?;
        writeln!(f, "Вакансия: \"{}\"", self.title)?;
        writeln!(f, "Зарплата: {}", self.salary_text())?;
        write!(f, "Ссылка: {}", self.url)
    }
}
