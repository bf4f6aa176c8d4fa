use crate::model::{id::ItemId, item::Category};
use derive_new::new;

#[derive(new)]
pub struct CreateItem {
    pub item_name: String,
    pub category: Category,
    pub size: String,
    pub price_per_day: i64,
    pub description: String,
    pub image_url: Option<String>,
}

#[derive(new)]
pub struct UpdateItem {
    pub item_id: ItemId,
    pub item_name: Option<String>,
    pub category: Option<Category>,
    pub size: Option<String>,
    pub price_per_day: Option<i64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(new)]
pub struct DeleteItem {
    pub item_id: ItemId,
}

/// Catalog listing filters. Price bounds are in cents and inclusive.
#[derive(new)]
pub struct ItemListOptions {
    pub limit: i64,
    pub offset: i64,
    pub category: Option<Category>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub search: Option<String>,
}
