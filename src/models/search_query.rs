use serde::Serialize;
use validator::Validate;

pub const MAX_PAGE_SIZE: u32 = 100;

/// Request state for one provider. Serializes to the shared query string
/// `per_page, page, text, archived`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct SearchQuery {
    #[serde(rename = "text")]
    #[validate(length(min = 1))]
    pub keyword: String,
    pub page: u32,
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
    pub archived: bool,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>, per_page: u32) -> Self {
        Self {
            keyword: keyword.into(),
            page: 0,
            per_page,
            archived: false,
        }
    }

    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}
