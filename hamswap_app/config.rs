use dotenvy::dotenv;
use std::env;

pub struct Config {
    pub listings_per_page: u32,
    pub ratings_per_page: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let listings_per_page = match env::var("HAMSWAP_LISTINGS_PER_PAGE") {
            Ok(val) => val.parse::<u32>().unwrap_or(20).max(1),
            Err(_) => 20,
        };

        let ratings_per_page = match env::var("HAMSWAP_RATINGS_PER_PAGE") {
            Ok(val) => val.parse::<u32>().unwrap_or(5).max(1),
            Err(_) => 5,
        };

        Self {
            listings_per_page,
            ratings_per_page,
        }
    }
}
