//! The cascading year → city → district selection.
//!
//! `None` stands for a placeholder. Every transition keeps the invariant that
//! a concrete district belongs to the chosen city, so the derived flags never
//! have to repair state after the fact.

use crate::catalog::{Catalog, DEFAULT_YEAR};
use crate::normalize::normalize_name;
use crate::route::RouteParams;

/// Label shown while no year is chosen.
pub const YEAR_PLACEHOLDER: &str = "選擇年份";
/// Label shown while no city is chosen.
pub const CITY_PLACEHOLDER: &str = "請選擇 縣/市";
/// Label shown while no district is chosen.
pub const DISTRICT_PLACEHOLDER: &str = "請先選擇 縣/市";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    year: Option<String>,
    city: Option<String>,
    district: Option<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            year: Some(DEFAULT_YEAR.to_string()),
            city: None,
            district: None,
        }
    }
}

impl Selection {
    /// Seed the selection from route parameters, keeping only values the
    /// catalog knows (after glyph normalization).
    pub fn from_route(route: &RouteParams, catalog: &Catalog) -> Self {
        let mut selection = Selection::default();

        if let Some(year) = route.year.as_deref().filter(|y| catalog.is_year(y)) {
            selection.year = Some(year.to_string());
        }

        let city = route
            .city
            .as_deref()
            .map(normalize_name)
            .filter(|c| catalog.is_city(c));
        if let Some(city) = city {
            selection.district = route
                .district
                .as_deref()
                .map(normalize_name)
                .filter(|d| catalog.is_district_of(&city, d));
            selection.city = Some(city);
        }

        selection
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    pub fn year_label(&self) -> &str {
        self.year().unwrap_or(YEAR_PLACEHOLDER)
    }

    pub fn city_label(&self) -> &str {
        self.city().unwrap_or(CITY_PLACEHOLDER)
    }

    pub fn district_label(&self) -> &str {
        self.district().unwrap_or(DISTRICT_PLACEHOLDER)
    }

    /// Options for the district selector: the chosen city's districts.
    pub fn district_options<'a>(&self, catalog: &'a Catalog) -> &'a [String] {
        match self.city() {
            Some(city) => catalog.districts(city),
            None => &[],
        }
    }

    pub fn is_city_chosen(&self, catalog: &Catalog) -> bool {
        self.city().is_some_and(|c| catalog.is_city(c))
    }

    pub fn is_submittable(&self, catalog: &Catalog) -> bool {
        let year_ok = self.year().is_some_and(|y| catalog.is_year(y));
        let district_ok = match (self.city(), self.district()) {
            (Some(city), Some(district)) => catalog.is_district_of(city, district),
            _ => false,
        };
        year_ok && self.is_city_chosen(catalog) && district_ok
    }

    /// Year has no dependents; an empty or unknown value clears it.
    pub fn set_year(&mut self, catalog: &Catalog, year: &str) {
        let year = year.trim();
        self.year = catalog.is_year(year).then(|| year.to_string());
    }

    /// Change the city and reset the district when the city actually changes.
    ///
    /// An empty or unknown value returns both selectors to their placeholders.
    pub fn set_city(&mut self, catalog: &Catalog, city: &str) {
        let city = normalize_name(city.trim());
        let next = catalog.is_city(&city).then_some(city);
        if next == self.city {
            return;
        }
        log::debug!("city changed {:?} -> {:?}, clearing district", self.city, next);
        self.city = next;
        self.district = None;
    }

    /// Choose a district of the current city; anything else clears it.
    pub fn set_district(&mut self, catalog: &Catalog, district: &str) {
        let district = normalize_name(district.trim());
        self.district = match self.city() {
            Some(city) if catalog.is_district_of(city, &district) => Some(district),
            _ => {
                if !district.is_empty() {
                    log::debug!("rejected district {:?} for city {:?}", district, self.city);
                }
                None
            }
        };
    }

    /// The route to publish, or `None` while the selection is incomplete.
    pub fn submit(&self, catalog: &Catalog) -> Option<RouteParams> {
        if !self.is_submittable(catalog) {
            return None;
        }
        Some(RouteParams {
            year: self.year.clone(),
            city: self.city.clone(),
            district: self.district.clone(),
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Action {
        Year(usize),
        City(usize),
        District(usize, usize),
        Clear,
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            (0usize..10).prop_map(Action::Year),
            (0usize..30).prop_map(Action::City),
            (0usize..30, 0usize..40).prop_map(|(c, d)| Action::District(c, d)),
            Just(Action::Clear),
        ]
    }

    proptest! {
        #[test]
        fn district_always_belongs_to_city(actions in prop::collection::vec(action(), 0..40)) {
            let catalog = Catalog::global();
            let cities = catalog.cities();
            let mut selection = Selection::default();

            for action in actions {
                match action {
                    Action::Year(i) => {
                        let year = catalog.years().get(i).cloned().unwrap_or_default();
                        selection.set_year(catalog, &year);
                    }
                    Action::City(i) => {
                        let city = cities.get(i).cloned().unwrap_or_default();
                        selection.set_city(catalog, &city);
                    }
                    Action::District(c, d) => {
                        let city = &cities[c % cities.len()];
                        let district = catalog.districts(city).get(d).cloned().unwrap_or_default();
                        selection.set_district(catalog, &district);
                    }
                    Action::Clear => selection.set_district(catalog, ""),
                }

                if let Some(district) = selection.district() {
                    let city = selection.city().unwrap_or_default();
                    prop_assert!(catalog.is_district_of(city, district));
                }

                let expected = selection.year().is_some_and(|y| catalog.is_year(y))
                    && selection.is_city_chosen(catalog)
                    && selection.district().is_some();
                prop_assert_eq!(selection.is_submittable(catalog), expected);
            }
        }
    }
}
