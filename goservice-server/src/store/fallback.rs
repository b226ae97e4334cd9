//! Static fallback store - fixed data when no database is wanted

use async_trait::async_trait;

use super::{ItemStore, StoreError};
use crate::models::{Item, GO_CATEGORY};

/// The fallback dataset, in id order
pub fn fallback_items() -> Vec<Item> {
    vec![
        Item::new(1, "Item A", GO_CATEGORY),
        Item::new(2, "Item B", GO_CATEGORY),
        Item::new(3, "Item C", GO_CATEGORY),
    ]
}

/// Store that always serves [`fallback_items`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticItemStore;

#[async_trait]
impl ItemStore for StaticItemStore {
    fn kind(&self) -> &'static str {
        "static"
    }

    async fn list_go_items(&self) -> Result<Vec<Item>, StoreError> {
        Ok(fallback_items())
    }
}
