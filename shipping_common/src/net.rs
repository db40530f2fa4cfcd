//! Rate API endpoint constants and the fixed request header set.

/// Base URL of the Navlungo rate API.
pub const DEFAULT_BASE_URL: &str = "https://api-qa.navlungo.com/api";
/// Path of the rate calculation endpoint, relative to the base URL.
pub const CALCULATE_PATH: &str = "Calculations/calculate";
/// Origin country used for every request.
pub const DEFAULT_ORIGIN_COUNTRY: &str = "TR";

/// Query parameter carrying the destination country code.
pub const PARAM_TO_COUNTRY: &str = "ToCountry";
/// Query parameter carrying the origin country code.
pub const PARAM_FROM_COUNTRY: &str = "FromCountry";
/// Query parameter carrying the parcel weight in kilograms.
pub const PARAM_WEIGHT: &str = "Weight";

/// Environment key holding the bearer credential.
pub const TOKEN_ENV_VAR: &str = "NAVLUNGO_API_TOKEN";
/// Environment key overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV_VAR: &str = "NAVLUNGO_API_BASE_URL";

/// Header name for the bearer credential.
pub const AUTHORIZATION: &str = "authorization";

/// Headers the rate API expects from its web client.
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[
    ("accept", "application/json, text/plain, */*"),
    ("accept-language", "tr-TR"),
    ("origin", "https://ship-qa.navlungo.com"),
    ("priority", "u=1, i"),
    ("referer", "https://ship-qa.navlungo.com/ship/priceCalculator"),
    (
        "sec-ch-ua",
        "\"Not(A:Brand\";v=\"99\", \"Google Chrome\";v=\"133\", \"Chromium\";v=\"133\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"macOS\""),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-site"),
    (
        "user-agent",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36",
    ),
];

/// Join the base URL and the calculation path like "base/path".
pub fn calculate_endpoint(base_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), CALCULATE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_ignores_trailing_slash() {
        assert_eq!(
            calculate_endpoint("https://example.test/api/"),
            "https://example.test/api/Calculations/calculate"
        );
        assert_eq!(
            calculate_endpoint(DEFAULT_BASE_URL),
            "https://api-qa.navlungo.com/api/Calculations/calculate"
        );
    }
}
