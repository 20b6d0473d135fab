//! Mapping between the URL path and the three selection parameters.
//!
//! Paths look like `/{year}/{city}/{district}` with every segment optional.
//! Segments handed to [`Route::parse`] must already be percent-decoded; the
//! browser side of the bridge takes care of that.

use crate::query::QueryKey;
use serde::Serialize;

/// Year, city and district as they appear in the path (not normalized).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RouteParams {
    pub year: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
}

/// Result of parsing a location path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Search(RouteParams),
    /// Unknown deep path; the app replaces it with `/`.
    Redirect,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_start_matches('/');
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Route::Search(RouteParams::default());
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        if segments.len() > 3 {
            return Route::Redirect;
        }

        let segment = |idx: usize| {
            segments
                .get(idx)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Route::Search(RouteParams {
            year: segment(0),
            city: segment(1),
            district: segment(2),
        })
    }
}

impl RouteParams {
    pub fn new(year: &str, city: &str, district: &str) -> Self {
        Self {
            year: Some(year.to_string()),
            city: Some(city.to_string()),
            district: Some(district.to_string()),
        }
    }

    /// A search is requested only when every segment is present.
    pub fn is_search_requested(&self) -> bool {
        self.year.is_some() && self.city.is_some() && self.district.is_some()
    }

    /// Format as a path, stopping at the first missing segment.
    pub fn to_path(&self) -> String {
        let mut path = String::new();
        for segment in [&self.year, &self.city, &self.district] {
            match segment {
                Some(s) => {
                    path.push('/');
                    path.push_str(s);
                }
                None => break,
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }

    pub fn query_key(&self) -> Option<QueryKey> {
        QueryKey::from_route(self)
    }

    /// Heading shown above the charts, e.g. `111年 臺北市 大安區`.
    pub fn title(&self) -> Option<String> {
        match (&self.year, &self.city, &self.district) {
            (Some(year), Some(city), Some(district)) => {
                Some(format!("{}年 {} {}", year, city, district))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_has_no_search() {
        for path in ["", "/", "//"] {
            match Route::parse(path) {
                Route::Search(params) => {
                    assert_eq!(params, RouteParams::default());
                    assert!(!params.is_search_requested());
                }
                Route::Redirect => panic!("{path:?} should not redirect"),
            }
        }
    }

    #[test]
    fn test_full_path() {
        let route = Route::parse("/111/臺北市/大安區");
        assert_eq!(route, Route::Search(RouteParams::new("111", "臺北市", "大安區")));
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let route = Route::parse("/111/臺北市/大安區/");
        assert_eq!(route, Route::Search(RouteParams::new("111", "臺北市", "大安區")));
    }

    #[test]
    fn test_partial_path_is_not_a_search() {
        let Route::Search(params) = Route::parse("/111/臺北市") else {
            panic!("expected search route");
        };
        assert_eq!(params.year.as_deref(), Some("111"));
        assert_eq!(params.district, None);
        assert!(!params.is_search_requested());
        assert_eq!(params.title(), None);
    }

    #[test]
    fn test_deep_path_redirects() {
        assert_eq!(Route::parse("/111/臺北市/大安區/extra"), Route::Redirect);
    }

    #[test]
    fn test_to_path() {
        assert_eq!(RouteParams::default().to_path(), "/");
        assert_eq!(
            RouteParams::new("111", "臺北市", "大安區").to_path(),
            "/111/臺北市/大安區"
        );
        let partial = RouteParams {
            year: Some("110".to_string()),
            city: None,
            district: Some("大安區".to_string()),
        };
        assert_eq!(partial.to_path(), "/110");
    }

    #[test]
    fn test_title() {
        assert_eq!(
            RouteParams::new("111", "臺北市", "大安區").title().as_deref(),
            Some("111年 臺北市 大安區")
        );
    }
}
