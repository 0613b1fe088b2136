use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Equipment category of a listing. The set is closed; the store rejects
/// anything outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TransceiverHf,
    TransceiverVhfUhf,
    TransceiverHandheld,
    AntennaHf,
    AntennaVhfUhf,
    AntennaAccessories,
    PowerSupply,
    Amplifier,
    Tuner,
    Rotator,
    SwrMeter,
    DigitalModes,
    Microphone,
    CablesConnectors,
    Tools,
    BooksManuals,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    Excellent,
    Good,
    Fair,
    PartsRepair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
    Gbp,
    Rsd,
}

/// Lifecycle state of a listing. Discovery only ever holds `Active` ones;
/// the rest exist for the seller-facing flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Draft,
    Active,
    Sold,
    Expired,
    Removed,
}

impl ListingStatus {
    /// The stored form, matching the serde rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Draft => "draft",
            ListingStatus::Active => "active",
            ListingStatus::Sold => "sold",
            ListingStatus::Expired => "expired",
            ListingStatus::Removed => "removed",
        }
    }
}

/// Ordering applied to the visible listing set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
}

/// Denormalized seller info carried on each listing so the discovery layer
/// never has to join profiles itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerSummary {
    pub callsign: String,
    pub display_name: Option<String>,
    pub location_city: Option<String>,
    pub location_country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub category: Category,
    pub condition: Condition,
    /// Never negative; enforced at creation time by the store.
    pub price: f64,
    pub currency: Currency,
    pub created_at: Option<DateTime<Utc>>,
    pub seller: Option<SellerSummary>,
}
