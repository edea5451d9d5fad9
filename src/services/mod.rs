pub mod aggregator_service;
pub mod headhunter_service;
pub mod normalizer;
pub mod provider;
pub mod storage_service;
pub mod superjob_service;
