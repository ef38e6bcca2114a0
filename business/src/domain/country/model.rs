use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    pub code: String,
}

impl Country {
    pub fn new(id: impl Into<String>, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
        }
    }

    /// True when `value` is this country's id, code or name.
    pub fn is_selected_by(&self, value: &str) -> bool {
        self.id == value || self.code.eq_ignore_ascii_case(value) || self.name == value
    }
}
