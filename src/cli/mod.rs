//! Interactive text front-end: keyword prompt, progress summary and the
//! list/sort menu. Generic over its input and output so it can be driven
//! from tests.

pub mod menu;

use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::Result;
use crate::models::sort_direction::SortDirection;
use crate::models::vacancy::Vacancy;
use crate::services::aggregator_service::{AggregationReport, PageOutcome, PageStatus};
use crate::services::storage_service::StorageService;
use self::menu::{MenuCommand, MAIN_MENU, SORT_MENU};

/// Returns `None` at end of input.
async fn prompt<R, W>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub async fn read_keyword<R, W>(input: &mut R, out: &mut W, default: &str) -> Result<String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let text = format!("Введите ключевое слово для поиска [{}]: ", default);
    let keyword = prompt(input, out, &text)
        .await?
        .filter(|keyword| !keyword.is_empty())
        .unwrap_or_else(|| default.to_string());
    Ok(keyword)
}

/// Progress line for one finished page request.
pub fn print_page<W: Write>(out: &mut W, outcome: &PageOutcome) -> Result<()> {
    match &outcome.status {
        PageStatus::Fetched { count } => writeln!(
            out,
            "({}) Страница {} - загружено вакансий: {}",
            outcome.provider, outcome.page, count
        )?,
        PageStatus::Failed { reason } => writeln!(
            out,
            "({}) Страница {} - ошибка: {}",
            outcome.provider, outcome.page, reason
        )?,
    }
    out.flush()?;
    Ok(())
}

/// Totals printed once collection is over; per-page lines go through
/// [`print_page`] while it runs.
pub fn print_summary<W: Write>(out: &mut W, report: &AggregationReport) -> Result<()> {
    if !report.rejected.is_empty() {
        writeln!(out, "Пропущено некорректных вакансий: {}", report.rejected.len())?;
    }
    writeln!(out, "Всего вакансий: {}", report.vacancies.len())?;
    Ok(())
}

fn print_vacancies<W: Write>(out: &mut W, vacancies: &[Vacancy]) -> Result<()> {
    for vacancy in vacancies {
        writeln!(out, "\n{}\n", vacancy)?;
    }
    Ok(())
}

pub async fn run_menu<R, W>(
    storage: &StorageService,
    keyword: &str,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    while let Some(line) = prompt(input, out, MAIN_MENU).await? {
        let result = match MenuCommand::parse(&line) {
            MenuCommand::Exit => break,
            MenuCommand::List => storage.load(keyword).await,
            MenuCommand::Sort => {
                let Some(answer) = prompt(input, out, SORT_MENU).await? else {
                    break;
                };
                match answer.parse::<SortDirection>() {
                    Ok(direction) => storage.sort_by_salary(keyword, direction).await,
                    Err(_) => {
                        writeln!(out, "Неизвестное направление сортировки: {}", answer)?;
                        continue;
                    }
                }
            }
            MenuCommand::Unknown(other) => {
                writeln!(out, "Неизвестная команда: {}", other)?;
                continue;
            }
        };

        match result {
            Ok(vacancies) => print_vacancies(out, &vacancies)?,
            Err(err) => {
                tracing::error!(error = %err, "Menu action failed");
                writeln!(out, "Ошибка: {}", err)?;
            }
        }
    }
    Ok(())
}
