use hamswap_types::listing::{Category, Condition, Currency, Listing, SellerSummary};
use hamswap_types::rating::Rating;

use crate::models::{ListingRow, RatingRow};

fn category_from_str(s: &str) -> Category {
    match s {
        "transceiver_hf" => Category::TransceiverHf,
        "transceiver_vhf_uhf" => Category::TransceiverVhfUhf,
        "transceiver_handheld" => Category::TransceiverHandheld,
        "antenna_hf" => Category::AntennaHf,
        "antenna_vhf_uhf" => Category::AntennaVhfUhf,
        "antenna_accessories" => Category::AntennaAccessories,
        "power_supply" => Category::PowerSupply,
        "amplifier" => Category::Amplifier,
        "tuner" => Category::Tuner,
        "rotator" => Category::Rotator,
        "swr_meter" => Category::SwrMeter,
        "digital_modes" => Category::DigitalModes,
        "microphone" => Category::Microphone,
        "cables_connectors" => Category::CablesConnectors,
        "tools" => Category::Tools,
        "books_manuals" => Category::BooksManuals,
        _ => Category::Other, // Default fallback
    }
}

fn condition_from_str(s: &str) -> Condition {
    match s {
        "new" => Condition::New,
        "excellent" => Condition::Excellent,
        "fair" => Condition::Fair,
        "parts_repair" => Condition::PartsRepair,
        _ => Condition::Good, // Default fallback
    }
}

fn currency_from_str(s: &str) -> Currency {
    match s {
        "USD" => Currency::Usd,
        "GBP" => Currency::Gbp,
        "RSD" => Currency::Rsd,
        _ => Currency::Eur, // Default fallback
    }
}

impl From<ListingRow> for Listing {
    fn from(row: ListingRow) -> Self {
        // A listing without a profile row has no seller block at all.
        let seller = row.seller_callsign.map(|callsign| SellerSummary {
            callsign,
            display_name: row.seller_display_name,
            location_city: row.seller_city,
            location_country: row.seller_country,
        });

        Listing {
            id: row.id,
            title: row.title,
            description: row.description,
            manufacturer: row.manufacturer,
            model: row.model,
            category: category_from_str(&row.category),
            condition: condition_from_str(&row.condition),
            price: row.price,
            currency: currency_from_str(&row.currency),
            created_at: row.created_at,
            seller,
        }
    }
}

impl From<RatingRow> for Rating {
    fn from(row: RatingRow) -> Self {
        Rating {
            id: row.id,
            listing_id: row.listing_id,
            rater_id: row.rater_user_id,
            rated_id: row.rated_user_id,
            stars: row.rating.clamp(1, 5) as u8,
            comment: row.comment,
            created_at: row.created_at,
            response: row.response,
            response_at: row.response_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn listing_row() -> ListingRow {
        ListingRow {
            id: Uuid::new_v4(),
            title: "Yaesu FT-891".to_string(),
            description: None,
            manufacturer: Some("Yaesu".to_string()),
            model: Some("FT-891".to_string()),
            category: "transceiver_hf".to_string(),
            condition: "good".to_string(),
            price: 540.0,
            currency: "EUR".to_string(),
            created_at: Some(Utc::now()),
            seller_callsign: None,
            seller_display_name: Some("Marko".to_string()),
            seller_city: None,
            seller_country: None,
        }
    }

    #[test]
    fn unknown_category_falls_back_to_other() {
        let mut row = listing_row();
        row.category = "flux_capacitor".to_string();
        let listing: Listing = row.into();
        assert_eq!(listing.category, Category::Other);
    }

    #[test]
    fn seller_block_requires_a_callsign() {
        let listing: Listing = listing_row().into();
        assert!(listing.seller.is_none());

        let mut row = listing_row();
        row.seller_callsign = Some("YU1ABC".to_string());
        let listing: Listing = row.into();
        let seller = listing.seller.unwrap();
        assert_eq!(seller.callsign, "YU1ABC");
        assert_eq!(seller.display_name.as_deref(), Some("Marko"));
    }
}
