use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub service_type: String,
    pub provider_id: String,
    pub provider_name: String,
    pub status: BookingStatus,
    pub scheduled_time: DateTime<Utc>,
    pub price: i64,
    pub emergency: bool,
    pub customer: CustomerDetails,
    pub created_at: DateTime<Utc>,
}

/// Customer contact details carried on a booking. Optional fields are kept
/// as empty strings on the wire, matching what clients already expect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum BookingStatus {
    Scheduled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Scheduled => "Scheduled",
        }
    }
}
