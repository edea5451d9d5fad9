use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<" => Ok(SortDirection::Ascending),
            ">" => Ok(SortDirection::Descending),
            other => Err(format!("Unknown sort direction: {:?}", other)),
        }
    }
}
