//! Utility functions for the catalog indexer repository.

use catalog_indexer_shared::ProductRecord;

use crate::types::BatchAction;

/// Choose the batch action for a record.
///
/// Records that carry their own `objectID`, string or numeric, replace the stored
/// object with that ID.
/// Records without one are added and receive a backend-generated ID.
///
/// # Example
///
/// ```
/// use catalog_indexer_repository::{batch_action, BatchAction};
/// use catalog_indexer_shared::ProductRecord;
///
/// let record: ProductRecord = serde_json::from_str(r#"{"objectID": "1", "price": 10}"#).unwrap();
/// assert_eq!(batch_action(&record), BatchAction::UpdateObject);
/// ```
pub fn batch_action(record: &ProductRecord) -> BatchAction {
    if record.has_object_id() {
        BatchAction::UpdateObject
    } else {
        BatchAction::AddObject
    }
}
