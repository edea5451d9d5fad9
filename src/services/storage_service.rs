use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::error::{Error, Result};
use crate::models::sort_direction::SortDirection;
use crate::models::vacancy::Vacancy;
use crate::utils::text::title_case;

const INDENT: &[u8] = b"    ";

/// Flat-file store: one pretty-printed JSON array per search keyword.
#[derive(Debug, Clone)]
pub struct StorageService {
    data_dir: PathBuf,
}

impl StorageService {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Separators, NUL and leading dots become `_`, so the file always
    /// lands directly inside the data directory.
    pub fn file_name(keyword: &str) -> String {
        let stem: String = title_case(keyword.trim())
            .chars()
            .map(|c| match c {
                '/' | '\\' | '\0' => '_',
                other => other,
            })
            .collect();
        let dots = stem.len() - stem.trim_start_matches('.').len();
        let stem = format!("{}{}", "_".repeat(dots), &stem[dots..]);
        format!("{}.json", if stem.is_empty() { "_" } else { &stem })
    }

    pub fn path_for(&self, keyword: &str) -> PathBuf {
        self.data_dir.join(Self::file_name(keyword))
    }

    /// Replaces whatever was stored under `keyword`.
    #[instrument(skip(self, vacancies), fields(count = vacancies.len()))]
    pub async fn save(&self, keyword: &str, vacancies: &[Vacancy]) -> Result<PathBuf> {
        let path = self.path_for(keyword);

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        vacancies.serialize(&mut serializer)?;
        buf.push(b'\n');

        if !self.data_dir.as_os_str().is_empty() {
            tokio::fs::create_dir_all(&self.data_dir).await?;
        }
        tokio::fs::write(&path, buf).await?;

        info!(path = %path.display(), "Saved vacancies");
        Ok(path)
    }

    #[instrument(skip(self))]
    pub async fn load(&self, keyword: &str) -> Result<Vec<Vacancy>> {
        let path = self.path_for(keyword);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(Error::NotFound(format!(
                    "No saved vacancies at {}",
                    path.display()
                )));
            }
            Err(err) => return Err(err.into()),
        };

        parse_vacancies(&path, &bytes)
    }

    /// Orders by `(salary_from, salary_to)` with missing bounds as zero.
    /// Equal keys keep their stored order in both directions.
    pub async fn sort_by_salary(
        &self,
        keyword: &str,
        direction: SortDirection,
    ) -> Result<Vec<Vacancy>> {
        let mut vacancies = self.load(keyword).await?;
        sort_vacancies(&mut vacancies, direction);
        Ok(vacancies)
    }
}

fn parse_vacancies(path: &Path, bytes: &[u8]) -> Result<Vec<Vacancy>> {
    serde_json::from_slice(bytes).map_err(|e| Error::CorruptData {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

pub fn sort_vacancies(vacancies: &mut [Vacancy], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => vacancies.sort_by_key(Vacancy::salary_key),
        SortDirection::Descending => vacancies.sort_by(|a, b| b.salary_key().cmp(&a.salary_key())),
    }
}
