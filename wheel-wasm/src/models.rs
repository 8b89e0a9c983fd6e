use serde::Deserialize;
use wheel_core::Item;

/// Response body of the item source endpoint.
///
/// A missing or null `items` array deserializes as empty, which downstream
/// code already treats as the no-items state.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

/// One item as the source serializes it. Labels may be blank upstream.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.id, record.label)
    }
}
