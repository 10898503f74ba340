use serde::Serialize;

/// Summary returned after every quiz has been removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAllResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteAllResponse {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}
