use crate::normalize::normalize_name;
use crate::route::RouteParams;
use serde::Serialize;

/// Normalized address of one statistics request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QueryKey {
    pub year: String,
    pub city: String,
    pub district: String,
}

impl QueryKey {
    pub fn new(year: &str, city: &str, district: &str) -> Self {
        Self {
            year: year.trim().to_string(),
            city: normalize_name(city.trim()),
            district: normalize_name(district.trim()),
        }
    }

    /// Build the key from route parameters; `None` unless all three are present.
    pub fn from_route(route: &RouteParams) -> Option<Self> {
        match (&route.year, &route.city, &route.district) {
            (Some(year), Some(city), Some(district)) => Some(Self::new(year, city, district)),
            _ => None,
        }
    }

    /// `{endpoint}/{year}?COUNTY={city}&TOWN={district}`
    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}?COUNTY={}&TOWN={}",
            endpoint.trim_end_matches('/'),
            self.year,
            self.city,
            self.district
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_shape() {
        let key = QueryKey::new("111", "臺北市", "大安區");
        assert_eq!(
            key.url("https://example.test/api/"),
            "https://example.test/api/111?COUNTY=臺北市&TOWN=大安區"
        );
    }

    #[test]
    fn test_legacy_route_maps_to_same_key() {
        let standard = QueryKey::from_route(&RouteParams::new("111", "臺北市", "大安區"));
        let legacy = QueryKey::from_route(&RouteParams::new("111", "台北市", "大安區"));
        assert!(standard.is_some());
        assert_eq!(standard, legacy);
    }

    #[test]
    fn test_incomplete_route_has_no_key() {
        let route = RouteParams {
            year: Some("111".to_string()),
            city: Some("臺北市".to_string()),
            district: None,
        };
        assert_eq!(QueryKey::from_route(&route), None);
    }
}
