//! Listing of the searchable years, cities and districts.

use census_core::catalog::Catalog;
use census_core::normalize::normalize_name;

/// Print the catalog, or only the districts of `city`.
pub fn run_catalog(city: Option<&str>, json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::global();
    let output = match city {
        Some(city) => {
            let city = normalize_name(city.trim());
            if !catalog.is_city(&city) {
                anyhow::bail!("unknown city {:?}", city);
            }
            if json {
                serde_json::to_string_pretty(&serde_json::json!({
                    "city": city,
                    "districts": catalog.districts(&city),
                }))?
            } else {
                format_districts(catalog, &city)
            }
        }
        None => {
            if json {
                serde_json::to_string_pretty(&catalog_json(catalog))?
            } else {
                format_catalog(catalog)
            }
        }
    };
    println!("{}", output);
    Ok(())
}

pub fn format_districts(catalog: &Catalog, city: &str) -> String {
    let districts = catalog.districts(city);
    format!("{} ({} 區)\n  {}", city, districts.len(), districts.join(" "))
}

pub fn format_catalog(catalog: &Catalog) -> String {
    let mut lines = vec![format!("年份: {}", catalog.years().join(" "))];
    for city in catalog.cities() {
        lines.push(format_districts(catalog, city));
    }
    lines.join("\n")
}

fn catalog_json(catalog: &Catalog) -> serde_json::Value {
    let cities: serde_json::Map<String, serde_json::Value> = catalog
        .cities()
        .iter()
        .map(|city| (city.clone(), serde_json::json!(catalog.districts(city))))
        .collect();
    serde_json::json!({
        "years": catalog.years(),
        "cities": cities,
    })
}
