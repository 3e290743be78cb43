use anyhow::Result;
use lagoon_eats::core::RecordSource;
use lagoon_eats::utils::validation::Validate;
use lagoon_eats::{
    menu_for_stall, suggest, BrowseEngine, BrowseError, BrowsePreset, CsvFileSource, PriceRange,
    SortOption, StallQuery,
};
use tempfile::TempDir;

const STALLS_CSV: &str = "\
stall_id,stall_name,lowest_price,highest_price,opening_time,closing_time,days_closed,tags,rating,promo
1,Burger Hub,60,150,08:00,20:00,Sunday,\"Burgers, Fries\",4.5,
2,Noodle Bar,45,90,09:00,19:00,Sunday,\"Noodles, Soups\",4.0,Free soup
3,Burger King,80,250,07:00,21:00,None,\"Burgers, Chicken\",3.5,
4,Silog Station,45,95,06:00,15:00,Saturday,\"Silog, Rice Dishes, Student Meal\",4.8,
5,Kape Kanto,30,80,07:00,18:00,Sunday,\"Coffee, Desserts\",3.9,Buy 1 Take 1
";

const ITEMS_CSV: &str = "\
item_id,stall_id,item_name,price,food_rating
1,4,Tapsilog,95,4.9
2,1,Cheeseburger,85,4.4
3,4,Longsilog,80,4.6
4,4,Hotsilog,80,4.1
5,2,Beef Mami,70,4.0
";

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> Result<String> {
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok(path.to_string_lossy().into_owned())
}

fn names(records: &[lagoon_eats::Record]) -> Vec<&str> {
    records.iter().filter_map(|r| r.get_str("stall_name")).collect()
}

#[test]
fn test_end_to_end_browse_from_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let stalls_path = write_fixture(&temp_dir, "stalls.csv", STALLS_CSV)?;

    let engine = BrowseEngine::new(BrowsePreset::default().fields);
    let query = StallQuery {
        search: Some("burger".to_string()),
        sort: SortOption::LowToHigh,
        ..StallQuery::default()
    };

    let result = engine.browse_source(&CsvFileSource::new(&stalls_path), &query)?;
    assert_eq!(names(&result), vec!["Burger Hub", "Burger King"]);
    assert_eq!(result[0].get_str("days_closed"), Some("Sunday"));
    assert!(result[0].get("promo").is_none());
    Ok(())
}

#[test]
fn test_preset_drives_default_listing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let stalls_path = write_fixture(&temp_dir, "stalls.csv", STALLS_CSV)?;
    let preset_path = write_fixture(
        &temp_dir,
        "preset.toml",
        r#"
[defaults]
sort = "high-to-low"
cuisines = ["Burgers", "Silog"]

[defaults.price_range]
min = 40.0
max = 200.0
"#,
    )?;

    let preset = BrowsePreset::from_file(&preset_path)?;
    preset.validate()?;

    let stalls = CsvFileSource::new(&stalls_path).load()?;
    let query = preset.defaults.to_query();
    let engine = BrowseEngine::new(preset.fields);
    let result = engine.browse(&stalls, &query)?;

    assert_eq!(names(&result), vec!["Burger Hub", "Silog Station"]);
    assert_eq!(query.price_range, Some(PriceRange::new(40.0, 200.0)));
    Ok(())
}

#[test]
fn test_menu_for_stall_from_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let items_path = write_fixture(&temp_dir, "items.csv", ITEMS_CSV)?;

    let items = CsvFileSource::new(&items_path).load()?;
    let menu = menu_for_stall(&items, "stall_id", &serde_json::json!(4), "price")?;
    let item_names: Vec<_> = menu.iter().filter_map(|r| r.get_str("item_name")).collect();

    assert_eq!(item_names, vec!["Longsilog", "Hotsilog", "Tapsilog"]);
    Ok(())
}

#[test]
fn test_suggestions_for_search_box() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let stalls_path = write_fixture(&temp_dir, "stalls.csv", STALLS_CSV)?;
    let stalls = CsvFileSource::new(&stalls_path).load()?;

    assert_eq!(
        suggest(&stalls, "stall_name", "BUR", 5),
        vec!["Burger Hub", "Burger King"]
    );
    assert!(suggest(&stalls, "stall_name", "", 5).is_empty());
    Ok(())
}

#[test]
fn test_sorting_by_a_missing_column_fails_fast() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let stalls_path = write_fixture(&temp_dir, "stalls.csv", STALLS_CSV)?;
    let stalls = CsvFileSource::new(&stalls_path).load()?;

    match lagoon_eats::sort(&stalls, "promo", true) {
        Err(BrowseError::InvalidKey { key, index }) => {
            assert_eq!(key, "promo");
            assert_eq!(index, 0);
        }
        other => panic!("expected InvalidKey, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_malformed_preset_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let preset_path = write_fixture(&temp_dir, "preset.toml", "[defaults\nsort = 1")?;

    let err = BrowsePreset::from_file(&preset_path).unwrap_err();
    assert!(matches!(err, BrowseError::TomlParse(_)));
    assert!(err.user_friendly_message().starts_with("Invalid settings"));
    Ok(())
}
