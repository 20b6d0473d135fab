use crate::error::CatalogError;
use csv::ReaderBuilder;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Embedded CSV of every city and its districts (`city,district`), in display order.
pub static DISTRICTS_CSV: &str = include_str!("../../fixtures/districts.csv");

/// Survey years (ROC calendar) published by the household statistics dataset.
pub const YEARS: [&str; 7] = ["106", "107", "108", "109", "110", "111", "112"];

/// Year preselected when the route does not name a valid one.
pub const DEFAULT_YEAR: &str = "111";

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Immutable reference data for the three selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    years: Vec<String>,
    cities: Vec<String>,
    districts: HashMap<String, Vec<String>>,
}

impl Catalog {
    /// The process-wide catalog parsed from the embedded fixture.
    pub fn global() -> &'static Catalog {
        CATALOG.get_or_init(|| match Catalog::parse(&YEARS, DISTRICTS_CSV) {
            Ok(catalog) => catalog,
            Err(e) => panic!("failed to parse embedded districts.csv: {}", e),
        })
    }

    /// Parse a `city,district` CSV (with header row) into a catalog.
    ///
    /// Cities keep the order of their first appearance; districts keep file order.
    pub fn parse(years: &[&str], csv_object: &str) -> Result<Catalog, CatalogError> {
        let mut cities: Vec<String> = Vec::new();
        let mut districts: HashMap<String, Vec<String>> = HashMap::new();

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());

        for (idx, row) in rdr.records().enumerate() {
            let record = row?;
            let city = record
                .get(0)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or(CatalogError::MissingColumn { row: idx + 1, column: "city" })?;
            let district = record
                .get(1)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or(CatalogError::MissingColumn { row: idx + 1, column: "district" })?;

            let entry = districts.entry(city.to_string()).or_insert_with(|| {
                cities.push(city.to_string());
                Vec::new()
            });
            if !entry.iter().any(|d| d == district) {
                entry.push(district.to_string());
            }
        }

        if cities.is_empty() {
            return Err(CatalogError::Empty);
        }

        log::debug!(
            "catalog loaded: {} years, {} cities, {} districts",
            years.len(),
            cities.len(),
            districts.values().map(Vec::len).sum::<usize>()
        );

        Ok(Catalog {
            years: years.iter().map(|y| y.to_string()).collect(),
            cities,
            districts,
        })
    }

    pub fn years(&self) -> &[String] {
        &self.years
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Districts of `city`, or an empty slice for an unknown city.
    pub fn districts(&self, city: &str) -> &[String] {
        self.districts.get(city).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_year(&self, year: &str) -> bool {
        self.years.iter().any(|y| y == year)
    }

    pub fn is_city(&self, city: &str) -> bool {
        self.districts.contains_key(city)
    }

    pub fn is_district_of(&self, city: &str, district: &str) -> bool {
        self.districts(city).iter().any(|d| d == district)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_catalog_counts() {
        let catalog = Catalog::global();
        assert_eq!(catalog.cities().len(), 22);
        let total: usize = catalog
            .cities()
            .iter()
            .map(|c| catalog.districts(c).len())
            .sum();
        assert_eq!(total, 368);
        assert_eq!(catalog.years().len(), YEARS.len());
        assert!(catalog.is_year(DEFAULT_YEAR));
    }

    #[test]
    fn test_city_order_follows_fixture() {
        let catalog = Catalog::global();
        assert_eq!(catalog.cities()[0], "臺北市");
        assert_eq!(catalog.cities()[1], "新北市");
        assert_eq!(catalog.districts("臺北市")[0], "中正區");
    }

    #[test]
    fn test_district_membership() {
        let catalog = Catalog::global();
        assert!(catalog.is_district_of("臺北市", "大安區"));
        assert!(catalog.is_district_of("臺中市", "大安區"));
        assert!(!catalog.is_district_of("高雄市", "大安區"));
        assert!(catalog.districts("火星市").is_empty());
        assert!(!catalog.is_city("台北市"));
    }

    #[test]
    fn test_parse_rejects_missing_column() {
        let err = Catalog::parse(&YEARS, "city,district\n臺北市\n").unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn { row: 1, column: "district" }));
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = Catalog::parse(&YEARS, "city,district\n").unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_parse_deduplicates_districts() {
        let catalog = Catalog::parse(&["111"], "city,district\nA,x\nA,x\nB,y\nA,z\n").unwrap();
        assert_eq!(catalog.cities(), ["A", "B"]);
        assert_eq!(catalog.districts("A"), ["x", "z"]);
    }
}
