use serde::{Deserialize, Serialize};

/// One checklist row as recorded by the inspector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckEntry {
    #[serde(alias = "check_item")]
    pub check_item_key: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub comments: Option<String>,
}

impl CheckEntry {
    pub fn comments(&self) -> Option<&str> {
        self.comments
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
