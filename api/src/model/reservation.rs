use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ItemId, ReservationId, UserId},
    reservation::{Availability, Reservation, ReservationItem, ReservationStatus},
};
use serde::{Deserialize, Serialize};

use crate::model::item::CategoryName;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatusName {
    Active,
    Cancelled,
    Completed,
}

impl From<ReservationStatus> for ReservationStatusName {
    fn from(value: ReservationStatus) -> Self {
        match value {
            ReservationStatus::Active => Self::Active,
            ReservationStatus::Cancelled => Self::Cancelled,
            ReservationStatus::Completed => Self::Completed,
        }
    }
}

impl From<ReservationStatusName> for ReservationStatus {
    fn from(value: ReservationStatusName) -> Self {
        match value {
            ReservationStatusName::Active => Self::Active,
            ReservationStatusName::Cancelled => Self::Cancelled,
            ReservationStatusName::Completed => Self::Completed,
        }
    }
}

// The period invariant (start strictly before end) is checked by
// RentalPeriod::new in the handler, not by the wire type.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationResponse {
    pub reservation_id: ReservationId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationStatusRequest {
    pub status: ReservationStatusName,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub available: bool,
    pub conflicts_with: Option<ReservationId>,
}

impl From<Availability> for AvailabilityResponse {
    fn from(value: Availability) -> Self {
        match value {
            Availability::Available => Self {
                available: true,
                conflicts_with: None,
            },
            Availability::Conflict { with } => Self {
                available: false,
                conflicts_with: Some(with),
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: ReservationId,
    pub reserved_by: UserId,
    pub status: ReservationStatusName,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub reserved_at: DateTime<Utc>,
    pub item: ReservationItemResponse,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            reserved_by,
            status,
            period,
            reserved_at,
            item,
        } = value;
        Self {
            reservation_id,
            reserved_by,
            status: status.into(),
            start_date: period.start(),
            end_date: period.end(),
            reserved_at,
            item: item.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationItemResponse {
    pub item_id: ItemId,
    pub item_name: String,
    pub category: CategoryName,
    pub price_per_day: i64,
}

impl From<ReservationItem> for ReservationItemResponse {
    fn from(value: ReservationItem) -> Self {
        let ReservationItem {
            item_id,
            item_name,
            category,
            price_per_day,
        } = value;
        Self {
            item_id,
            item_name,
            category: category.into(),
            price_per_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use kernel::model::{item::Category, reservation::RentalPeriod};

    #[test]
    fn reservation_response_flattens_the_period() {
        let start = Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
        let reservation = Reservation {
            reservation_id: ReservationId::new(),
            reserved_by: UserId::new(),
            status: ReservationStatus::Active,
            period: RentalPeriod::new(start, end).unwrap(),
            reserved_at: start,
            item: ReservationItem {
                item_id: ItemId::new(),
                item_name: "Mountain Bike Pro".into(),
                category: Category::Bike,
                price_per_day: 4599,
            },
        };

        let json = serde_json::to_value(ReservationResponse::from(reservation)).unwrap();
        assert_eq!(json["status"], "active");
        assert_eq!(json["item"]["category"], "bike");
        assert_eq!(json["item"]["pricePerDay"], 4599);
        assert!(json["startDate"].is_string());
        assert!(json["endDate"].is_string());
    }
}
