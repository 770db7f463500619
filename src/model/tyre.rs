use serde::{Deserialize, Serialize};

/// Wheel position using UK near-side / off-side naming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TyrePosition {
    #[serde(rename = "NSF")]
    NearsideFront,
    #[serde(rename = "NSR")]
    NearsideRear,
    #[serde(rename = "OSR")]
    OffsideRear,
    #[serde(rename = "OSF")]
    OffsideFront,
}

impl TyrePosition {
    pub fn code(&self) -> &'static str {
        match self {
            TyrePosition::NearsideFront => "NSF",
            TyrePosition::NearsideRear => "NSR",
            TyrePosition::OffsideRear => "OSR",
            TyrePosition::OffsideFront => "OSF",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TyreType {
    #[default]
    Normal,
    RunFlat,
}

impl TyreType {
    pub fn label(&self) -> &'static str {
        match self {
            TyreType::Normal => "Normal",
            TyreType::RunFlat => "Run Flat",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TyreEntry {
    pub position: TyrePosition,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub depth: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub tyre_type: TyreType,
}

/// Display value for an optional tyre field; blank or missing renders "-"
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
