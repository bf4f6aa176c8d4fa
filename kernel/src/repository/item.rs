use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::ItemId,
    item::{
        event::{CreateItem, DeleteItem, ItemListOptions, UpdateItem},
        Item,
    },
    list::PaginatedList,
};

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create(&self, event: CreateItem) -> AppResult<ItemId>;
    async fn find_all(&self, options: ItemListOptions) -> AppResult<PaginatedList<Item>>;
    async fn find_by_id(&self, item_id: ItemId) -> AppResult<Option<Item>>;
    async fn update(&self, event: UpdateItem) -> AppResult<()>;
    async fn delete(&self, event: DeleteItem) -> AppResult<()>;
}
