use serde::{Deserialize, Serialize};

/// Outcome of checking turnover against the small business scheme (KOR).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KorStatus {
    pub eligible: bool,
    pub must_exit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_message: Option<String>,
}
