use crate::model::id::ItemId;
use strum::{AsRefStr, EnumString};

pub mod event;

/// Rental categories carried by the catalog. The size label is free text
/// because bike frames and ski lengths do not share a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Bike,
    Ski,
}

#[derive(Debug)]
pub struct Item {
    pub item_id: ItemId,
    pub item_name: String,
    pub category: Category,
    pub size: String,
    /// Daily price in cents. Always positive.
    pub price_per_day: i64,
    pub description: String,
    pub image_url: Option<String>,
}
