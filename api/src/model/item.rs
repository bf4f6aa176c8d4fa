use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::ItemId,
    item::{
        event::{CreateItem, ItemListOptions, UpdateItem},
        Category, Item,
    },
    list::PaginatedList,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryName {
    Bike,
    Ski,
}

impl From<Category> for CategoryName {
    fn from(value: Category) -> Self {
        match value {
            Category::Bike => Self::Bike,
            Category::Ski => Self::Ski,
        }
    }
}

impl From<CategoryName> for Category {
    fn from(value: CategoryName) -> Self {
        match value {
            CategoryName::Bike => Self::Bike,
            CategoryName::Ski => Self::Ski,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[garde(length(min = 1))]
    pub item_name: String,
    #[garde(skip)]
    pub category: CategoryName,
    #[garde(length(min = 1))]
    pub size: String,
    #[garde(range(min = 1))]
    pub price_per_day: i64,
    #[garde(skip)]
    pub description: String,
    #[garde(skip)]
    pub image_url: Option<String>,
}

impl From<CreateItemRequest> for CreateItem {
    fn from(value: CreateItemRequest) -> Self {
        let CreateItemRequest {
            item_name,
            category,
            size,
            price_per_day,
            description,
            image_url,
        } = value;
        CreateItem {
            item_name,
            category: category.into(),
            size,
            price_per_day,
            description,
            image_url,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[garde(inner(length(min = 1)))]
    pub item_name: Option<String>,
    #[garde(skip)]
    pub category: Option<CategoryName>,
    #[garde(inner(length(min = 1)))]
    pub size: Option<String>,
    #[garde(inner(range(min = 1)))]
    pub price_per_day: Option<i64>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub image_url: Option<String>,
}

#[derive(new)]
pub struct UpdateItemRequestWithId(ItemId, UpdateItemRequest);

impl From<UpdateItemRequestWithId> for UpdateItem {
    fn from(value: UpdateItemRequestWithId) -> Self {
        let UpdateItemRequestWithId(
            item_id,
            UpdateItemRequest {
                item_name,
                category,
                size,
                price_per_day,
                description,
                image_url,
            },
        ) = value;
        UpdateItem {
            item_id,
            item_name,
            category: category.map(Category::from),
            size,
            price_per_day,
            description,
            image_url,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ItemListQuery {
    #[garde(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[garde(range(min = 0))]
    #[serde(default)]
    pub offset: i64,
    #[garde(skip)]
    pub category: Option<CategoryName>,
    #[garde(inner(range(min = 0)))]
    pub min_price: Option<i64>,
    #[garde(inner(range(min = 0)))]
    pub max_price: Option<i64>,
    #[garde(skip)]
    pub search: Option<String>,
}

const DEFAULT_LIMIT: i64 = 20;
fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl From<ItemListQuery> for ItemListOptions {
    fn from(value: ItemListQuery) -> Self {
        let ItemListQuery {
            limit,
            offset,
            category,
            min_price,
            max_price,
            search,
        } = value;
        ItemListOptions {
            limit,
            offset,
            category: category.map(Category::from),
            min_price,
            max_price,
            search,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub item_id: ItemId,
    pub item_name: String,
    pub category: CategoryName,
    pub size: String,
    pub price_per_day: i64,
    pub description: String,
    pub image_url: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(value: Item) -> Self {
        let Item {
            item_id,
            item_name,
            category,
            size,
            price_per_day,
            description,
            image_url,
        } = value;
        Self {
            item_id,
            item_name,
            category: category.into(),
            size,
            price_per_day,
            description,
            image_url,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedItemResponse {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<ItemResponse>,
}

impl From<PaginatedList<Item>> for PaginatedItemResponse {
    fn from(value: PaginatedList<Item>) -> Self {
        let PaginatedList {
            total,
            limit,
            offset,
            items,
        } = value.map(ItemResponse::from);
        Self {
            total,
            limit,
            offset,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_fills_defaults() {
        let query: ItemListQuery = serde_json::from_str(r#"{"category": "bike"}"#).unwrap();
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert_eq!(query.offset, 0);
        assert!(matches!(query.category, Some(CategoryName::Bike)));
        assert!(query.search.is_none());
    }
}
