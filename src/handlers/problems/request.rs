//! Problem request DTOs

use serde::Deserialize;

/// List problems query parameters
#[derive(Debug, Deserialize)]
pub struct ListProblemsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub difficulty: Option<String>,
    pub tag: Option<String>,
}
