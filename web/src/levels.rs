use pikurosu_core::Level;
use serde::Deserialize;

const CATALOG_JSON: &str = include_str!("../levels.json");

#[derive(Deserialize, Debug)]
struct CatalogEntry {
    title: String,
    rows: Vec<String>,
}

/// Built-in levels, in menu order. Entries that fail to parse are skipped.
pub(crate) fn catalog() -> Vec<Level> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(CATALOG_JSON).expect("Malformed built-in level catalog");
    entries
        .into_iter()
        .filter_map(|entry| {
            let rows: Vec<&str> = entry.rows.iter().map(String::as_str).collect();
            match Level::from_rows(&entry.title, &rows) {
                Ok(level) => Some(level),
                Err(err) => {
                    log::warn!("Skipping catalog level {:?}: {}", entry.title, err);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_levels_all_parse() {
        let levels = catalog();
        assert!(!levels.is_empty());
        for level in &levels {
            assert_eq!(level.size(), (15, 15));
        }
    }
}
