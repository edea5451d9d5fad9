pub mod search_query;
pub mod sort_direction;
pub mod vacancy;
