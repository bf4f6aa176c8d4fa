use kernel::model::{
    id::ItemId,
    item::{Category, Item},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct ItemRow {
    pub item_id: ItemId,
    pub item_name: String,
    pub category: String,
    pub size: String,
    pub price_per_day: i64,
    pub description: String,
    pub image_url: Option<String>,
}

impl TryFrom<ItemRow> for Item {
    type Error = AppError;

    fn try_from(value: ItemRow) -> Result<Self, Self::Error> {
        let ItemRow {
            item_id,
            item_name,
            category,
            size,
            price_per_day,
            description,
            image_url,
        } = value;
        Ok(Item {
            item_id,
            item_name,
            category: category
                .parse::<Category>()
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
            size,
            price_per_day,
            description,
            image_url,
        })
    }
}

// Listing rows carry the filtered total via COUNT(*) OVER () so one query
// serves both the page and the pagination header.
#[derive(sqlx::FromRow)]
pub struct PaginatedItemRow {
    pub total: i64,
    #[sqlx(flatten)]
    pub item: ItemRow,
}
