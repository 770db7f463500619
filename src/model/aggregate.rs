use serde::{Deserialize, Serialize};

use super::{CheckEntry, HandoverRecord, PhotoEntry, TyreEntry, VehicleRecord};

/// Everything the report needs about one handover
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoverAggregate {
    pub handover: HandoverRecord,
    pub vehicle: VehicleRecord,
    #[serde(default)]
    pub checks: Vec<CheckEntry>,
    #[serde(default)]
    pub tyres: Vec<TyreEntry>,
    #[serde(default)]
    pub photos: Vec<PhotoEntry>,
}
