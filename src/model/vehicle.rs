use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub make: String,
    pub model: String,
    pub registration: String,
}

impl VehicleRecord {
    /// "BMW X5"
    pub fn make_model(&self) -> String {
        format!("{} {}", self.make.trim(), self.model.trim())
            .trim()
            .to_string()
    }

    /// "BMW X5 - AB12CDE", used in page footers
    pub fn label(&self) -> String {
        format!("{} - {}", self.make_model(), self.registration.trim())
    }
}
