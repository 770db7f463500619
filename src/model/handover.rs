use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Workflow state of a handover record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandoverStatus {
    #[default]
    Draft,
    Completed,
}

impl HandoverStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HandoverStatus::Draft => "Draft",
            HandoverStatus::Completed => "Completed",
        }
    }

    /// Text shown inside the status pill
    pub fn badge_text(&self) -> &'static str {
        match self {
            HandoverStatus::Draft => "DRAFT",
            HandoverStatus::Completed => "COMPLETED",
        }
    }
}

/// Whether the vehicle was collected from or delivered to a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandoverKind {
    #[default]
    Collection,
    Delivery,
}

impl HandoverKind {
    pub fn label(&self) -> &'static str {
        match self {
            HandoverKind::Collection => "Collection",
            HandoverKind::Delivery => "Delivery",
        }
    }
}

/// One inspection event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoverRecord {
    pub id: String,
    #[serde(alias = "vehicle_id")]
    pub vehicle_ref: String,
    #[serde(alias = "name")]
    pub inspector_name: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub date: NaiveDateTime,
    #[serde(default)]
    pub mileage: Option<u32>,
    #[serde(default)]
    pub other_comments: Option<String>,
    #[serde(default)]
    pub status: HandoverStatus,
    #[serde(default, alias = "type")]
    pub kind: HandoverKind,
}

impl HandoverRecord {
    /// Free-text comments, if any non-blank text was entered
    pub fn comments(&self) -> Option<&str> {
        self.other_comments
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Mileage with thousands separators, e.g. "45,000"
    pub fn mileage_display(&self) -> Option<String> {
        self.mileage.map(group_thousands)
    }
}

/// Format an integer with comma thousands separators
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Parse a stored timestamp: RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]`, or a bare date
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(45000), "45,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2024-03-09T14:05:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-09T14:05:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-09 14:05:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-03-09").map(|d| d.date()),
            Some(expected.date())
        );
        assert_eq!(parse_timestamp("09/03/2024"), None);
    }

    #[test]
    fn test_record_defaults_from_json() {
        let json = r#"{
            "id": "h1",
            "vehicle_id": "v1",
            "name": "Sam Carter",
            "date": "2024-03-09T10:00:00"
        }"#;
        let record: HandoverRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.vehicle_ref, "v1");
        assert_eq!(record.inspector_name, "Sam Carter");
        assert_eq!(record.status, HandoverStatus::Draft);
        assert_eq!(record.kind, HandoverKind::Collection);
        assert_eq!(record.mileage_display(), None);
    }

    #[test]
    fn test_blank_comments_are_absent() {
        let json = r#"{
            "id": "h1", "vehicle_ref": "v1", "inspector_name": "A",
            "date": "2024-03-09", "other_comments": "   \n ", "type": "delivery",
            "status": "completed"
        }"#;
        let record: HandoverRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.comments(), None);
        assert_eq!(record.kind, HandoverKind::Delivery);
        assert_eq!(record.status.badge_text(), "COMPLETED");
    }
}
