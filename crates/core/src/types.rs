/// Entity identifiers are opaque strings (seed data uses `p1`, `inst1`, ...;
/// new records get a UUIDv7).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Monetary amounts in USD (USDC on the mock chain).
pub type Amount = f64;

/// Generate a fresh identifier for a new record.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::now_v7().simple().to_string()
}
