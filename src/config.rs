use std::time::Duration;

pub const API_BASE: &str = "https://brickset.com/api/v2.asmx";

/// Environment variable read by [`api_key_from_env`].
pub const API_KEY_ENV: &str = "BRICKSET_API_KEY";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_ORDER: &str = "Number";

// Remote endpoint names
pub const CHECK_KEY: &str = "checkKey";
pub const LOGIN: &str = "login";
pub const GET_SETS: &str = "getSets";
pub const GET_SET: &str = "getSet";
pub const GET_RECENTLY_UPDATED_SETS: &str = "getRecentlyUpdatedSets";
pub const GET_ADDITIONAL_IMAGES: &str = "getAdditionalImages";
pub const GET_REVIEWS: &str = "getReviews";
pub const GET_INSTRUCTIONS: &str = "getInstructions";

pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}
