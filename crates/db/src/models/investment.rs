use aethera_core::types::{Amount, EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// One mock investment. Element of the `aethera_investments` blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: EntityId,
    pub investor_id: EntityId,
    pub project_id: EntityId,
    pub amount: Amount,
    pub timestamp: Timestamp,
}
