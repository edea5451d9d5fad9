use serde_json::Value as JsonValue;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::error::Result;
use crate::models::search_query::SearchQuery;
use crate::models::vacancy::{ProviderKind, Vacancy};
use crate::services::normalizer;
use crate::services::provider::VacancyProvider;

/// What happened to one page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    Fetched { count: usize },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    pub provider: ProviderKind,
    pub page: u32,
    pub status: PageStatus,
}

/// A raw item the normalizer could not map. The item itself is kept so it
/// can be inspected.
#[derive(Debug, Clone)]
pub struct RejectedItem {
    pub provider: ProviderKind,
    pub page: u32,
    pub reason: String,
    pub raw: JsonValue,
}

#[derive(Debug, Clone, Default)]
pub struct AggregationReport {
    pub vacancies: Vec<Vacancy>,
    pub pages: Vec<PageOutcome>,
    pub rejected: Vec<RejectedItem>,
}

impl AggregationReport {
    pub fn into_vacancies(self) -> Vec<Vacancy> {
        self.vacancies
    }

    pub fn failed_providers(&self) -> Vec<ProviderKind> {
        self.pages
            .iter()
            .filter(|outcome| matches!(outcome.status, PageStatus::Failed { .. }))
            .map(|outcome| outcome.provider)
            .collect()
    }
}

pub struct AggregatorService {
    providers: Vec<Box<dyn VacancyProvider>>,
    page_size: u32,
}

impl AggregatorService {
    pub fn new(providers: Vec<Box<dyn VacancyProvider>>, page_size: u32) -> Self {
        Self {
            providers,
            page_size,
        }
    }

    /// Drains every provider in turn, up to `max_pages` each. Provider
    /// failures end that provider's pagination and are recorded in the report.
    pub async fn collect(&self, keyword: &str, max_pages: u32) -> Result<AggregationReport> {
        self.collect_with_progress(keyword, max_pages, |_| {}).await
    }

    /// Same as [`collect`](Self::collect), calling `on_page` as soon as each
    /// page request finishes.
    #[instrument(skip(self, on_page))]
    pub async fn collect_with_progress<F>(
        &self,
        keyword: &str,
        max_pages: u32,
        mut on_page: F,
    ) -> Result<AggregationReport>
    where
        F: FnMut(&PageOutcome) + Send,
    {
        let base_query = SearchQuery::new(keyword, self.page_size);
        base_query.validate()?;

        let mut report = AggregationReport::default();

        for provider in &self.providers {
            let kind = provider.kind();

            for page in 0..max_pages {
                let query = base_query.at_page(page);

                let items = match provider.fetch_page(&query).await {
                    Ok(items) => items,
                    Err(err) if err.is_provider_failure() => {
                        warn!(provider = %kind, page, error = %err, "Provider page failed, skipping provider");
                        let outcome = PageOutcome {
                            provider: kind,
                            page,
                            status: PageStatus::Failed {
                                reason: err.to_string(),
                            },
                        };
                        on_page(&outcome);
                        report.pages.push(outcome);
                        break;
                    }
                    Err(err) => return Err(err),
                };

                info!(provider = %kind, page, count = items.len(), "Fetched vacancies page");
                let outcome = PageOutcome {
                    provider: kind,
                    page,
                    status: PageStatus::Fetched { count: items.len() },
                };
                on_page(&outcome);
                report.pages.push(outcome);

                if items.is_empty() {
                    break;
                }

                for item in items {
                    match normalizer::normalize(kind, &item) {
                        Ok(vacancy) => report.vacancies.push(vacancy),
                        Err(err) => {
                            warn!(provider = %kind, page, error = %err, "Skipping malformed vacancy");
                            report.rejected.push(RejectedItem {
                                provider: kind,
                                page,
                                reason: err.to_string(),
                                raw: item,
                            });
                        }
                    }
                }
            }
        }

        info!(
            total = report.vacancies.len(),
            rejected = report.rejected.len(),
            "Aggregation finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::services::provider::MockVacancyProvider;
    use mockall::predicate::function;
    use serde_json::json;

    fn hh_item(title: &str) -> JsonValue {
        json!({
            "employer": {"name": "Acme"},
            "name": title,
            "alternate_url": format!("http://hh/{}", title),
            "salary": null
        })
    }

    fn sj_item(title: &str) -> JsonValue {
        json!({
            "firm_name": "Initech",
            "profession": title,
            "link": format!("http://sj/{}", title),
            "payment_from": 1500,
            "payment_to": 0,
            "currency": "rub"
        })
    }

    fn provider(kind: ProviderKind) -> MockVacancyProvider {
        let mut mock = MockVacancyProvider::new();
        mock.expect_kind().return_const(kind);
        mock
    }

    #[tokio::test]
    async fn stops_at_first_empty_page() {
        let mut hh = provider(ProviderKind::HeadHunter);
        hh.expect_fetch_page()
            .with(function(|q: &SearchQuery| q.page < 2))
            .times(2)
            .returning(|q| Ok(vec![hh_item(&format!("p{}", q.page))]));
        hh.expect_fetch_page()
            .with(function(|q: &SearchQuery| q.page == 2))
            .times(1)
            .returning(|_| Ok(vec![]));

        let aggregator = AggregatorService::new(vec![Box::new(hh)], 100);
        let report = aggregator.collect("rust", 10).await.unwrap();

        let titles: Vec<_> = report.vacancies.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["p0", "p1"]);
        assert_eq!(report.pages.len(), 3);
        assert_eq!(
            report.pages.last().unwrap().status,
            PageStatus::Fetched { count: 0 }
        );
    }

    #[tokio::test]
    async fn respects_max_pages() {
        let mut hh = provider(ProviderKind::HeadHunter);
        hh.expect_fetch_page()
            .times(3)
            .returning(|_| Ok(vec![hh_item("same")]));

        let aggregator = AggregatorService::new(vec![Box::new(hh)], 100);
        let report = aggregator.collect("rust", 3).await.unwrap();

        assert_eq!(report.vacancies.len(), 3);
    }

    #[tokio::test]
    async fn failing_provider_does_not_stop_the_next_one() {
        let mut hh = provider(ProviderKind::HeadHunter);
        hh.expect_fetch_page().times(1).returning(|_| {
            Err(Error::Provider {
                provider: ProviderKind::HeadHunter,
                status: 503,
            })
        });

        let mut sj = provider(ProviderKind::SuperJob);
        sj.expect_fetch_page()
            .with(function(|q: &SearchQuery| q.page == 0))
            .times(1)
            .returning(|_| Ok(vec![sj_item("a"), sj_item("b")]));
        sj.expect_fetch_page()
            .with(function(|q: &SearchQuery| q.page == 1))
            .times(1)
            .returning(|_| Ok(vec![]));

        let aggregator = AggregatorService::new(vec![Box::new(hh), Box::new(sj)], 100);
        let report = aggregator.collect("rust", 5).await.unwrap();

        assert_eq!(report.vacancies.len(), 2);
        assert!(report.vacancies.iter().all(|v| v.api == ProviderKind::SuperJob));
        assert_eq!(report.failed_providers(), vec![ProviderKind::HeadHunter]);
    }

    #[tokio::test]
    async fn failure_mid_pagination_keeps_earlier_pages() {
        let mut hh = provider(ProviderKind::HeadHunter);
        hh.expect_fetch_page()
            .with(function(|q: &SearchQuery| q.page == 0))
            .times(1)
            .returning(|_| Ok(vec![hh_item("kept")]));
        hh.expect_fetch_page()
            .with(function(|q: &SearchQuery| q.page == 1))
            .times(1)
            .returning(|_| {
                Err(Error::UnexpectedResponse {
                    provider: ProviderKind::HeadHunter,
                    reason: "missing field `items`".into(),
                })
            });

        let aggregator = AggregatorService::new(vec![Box::new(hh)], 100);
        let report = aggregator.collect("rust", 5).await.unwrap();

        assert_eq!(report.vacancies.len(), 1);
        assert_eq!(report.vacancies[0].title, "kept");
    }

    #[tokio::test]
    async fn malformed_items_are_rejected_individually() {
        let mut sj = provider(ProviderKind::SuperJob);
        sj.expect_fetch_page()
            .with(function(|q: &SearchQuery| q.page == 0))
            .times(1)
            .returning(|_| Ok(vec![sj_item("good"), json!({"profession": "no firm"})]));
        sj.expect_fetch_page()
            .with(function(|q: &SearchQuery| q.page == 1))
            .times(1)
            .returning(|_| Ok(vec![]));

        let aggregator = AggregatorService::new(vec![Box::new(sj)], 100);
        let report = aggregator.collect("rust", 5).await.unwrap();

        assert_eq!(report.vacancies.len(), 1);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].provider, ProviderKind::SuperJob);
        assert_eq!(report.rejected[0].page, 0);
    }

    #[tokio::test]
    async fn sends_keyword_and_page_size() {
        let mut hh = provider(ProviderKind::HeadHunter);
        hh.expect_fetch_page()
            .with(function(|q: &SearchQuery| {
                q.keyword == "rust" && q.per_page == 50 && !q.archived && q.page == 0
            }))
            .times(1)
            .returning(|_| Ok(vec![]));

        let aggregator = AggregatorService::new(vec![Box::new(hh)], 50);
        let report = aggregator.collect("rust", 5).await.unwrap();
        assert!(report.vacancies.is_empty());
    }

    #[tokio::test]
    async fn empty_keyword_is_rejected_before_fetching() {
        let mut hh = provider(ProviderKind::HeadHunter);
        hh.expect_fetch_page().never();

        let aggregator = AggregatorService::new(vec![Box::new(hh)], 100);
        let err = aggregator.collect("", 5).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn reports_each_page_as_it_finishes() {
        let mut hh = provider(ProviderKind::HeadHunter);
        hh.expect_fetch_page().times(1).returning(|_| {
            Err(Error::Provider {
                provider: ProviderKind::HeadHunter,
                status: 500,
            })
        });
        let mut sj = provider(ProviderKind::SuperJob);
        sj.expect_fetch_page()
            .with(function(|q: &SearchQuery| q.page == 0))
            .times(1)
            .returning(|_| Ok(vec![sj_item("a")]));
        sj.expect_fetch_page()
            .with(function(|q: &SearchQuery| q.page == 1))
            .times(1)
            .returning(|_| Ok(vec![]));

        let aggregator = AggregatorService::new(vec![Box::new(hh), Box::new(sj)], 100);
        let mut seen = Vec::new();
        let report = aggregator
            .collect_with_progress("rust", 5, |outcome| seen.push(outcome.clone()))
            .await
            .unwrap();

        assert_eq!(seen, report.pages);
        assert_eq!(seen.len(), 3);
        assert!(matches!(seen[0].status, PageStatus::Failed { .. }));
        assert_eq!(seen[1].status, PageStatus::Fetched { count: 1 });
    }

    #[tokio::test]
    async fn each_collect_starts_fresh() {
        let mut hh = provider(ProviderKind::HeadHunter);
        hh.expect_fetch_page()
            .times(2)
            .returning(|_| Ok(vec![hh_item("x")]));

        let aggregator = AggregatorService::new(vec![Box::new(hh)], 100);
        let first = aggregator.collect("rust", 1).await.unwrap();
        let second = aggregator.collect("rust", 1).await.unwrap();

        assert_eq!(first.vacancies.len(), 1);
        assert_eq!(second.vacancies.len(), 1);
    }
}
