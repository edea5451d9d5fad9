pub mod cli;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    aggregator_service::AggregatorService, headhunter_service::HeadHunterService,
    provider::VacancyProvider, storage_service::StorageService,
    superjob_service::SuperJobService,
};

pub struct AppState {
    pub aggregator: AggregatorService,
    pub storage: StorageService,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let headhunter = HeadHunterService::new(
            config.headhunter_url.clone(),
            &config.headhunter_user_agent,
            config.http_timeout,
        )?;
        let superjob = SuperJobService::new(
            config.superjob_url.clone(),
            &config.superjob_api_key,
            config.http_timeout,
        )?;

        let providers: Vec<Box<dyn VacancyProvider>> = vec![Box::new(headhunter), Box::new(superjob)];
        let aggregator = AggregatorService::new(providers, config.page_size);
        let storage = StorageService::new(config.data_dir.clone());

        Ok(Self {
            aggregator,
            storage,
        })
    }
}
