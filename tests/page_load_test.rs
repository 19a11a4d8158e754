use section_toggler::{JsonFileStore, Toggler, TogglerConfig, UrlNavigation};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const CONFIG: &str = r#"
[toggler]
prefix = "toggleable_div_"
list_parameter = "expanded"

[style]
select_color = "steelblue"
deselect_color = "lightgray"

[shorthands]
about = "toggleable_div_about"
install = "toggleable_div_install"
everything = "all"

[page]
address = "https://example.org/index.html"

[[page.sections]]
id = "toggleable_div_about"
shown = false

[[page.sections]]
id = "toggleable_div_install"
shown = false

[[page.sections]]
id = "toggleable_div_faq"
shown = false
"#;

fn write_config() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CONFIG.as_bytes()).unwrap();
    file
}

fn load_page(
    config: &TogglerConfig,
    address: &str,
    store_path: &std::path::Path,
) -> Toggler<section_toggler::InMemoryPage, JsonFileStore> {
    let navigation = UrlNavigation::parse(address).unwrap();
    let store = JsonFileStore::open(store_path).unwrap();
    Toggler::new(config.to_options().unwrap(), config.build_page(), store, &navigation)
}

#[test]
fn test_state_survives_reload() {
    let config_file = write_config();
    let config = TogglerConfig::from_file(config_file.path()).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("memory.json");
    let address = config.page_address().unwrap().to_string();

    let mut first = load_page(&config, &address, &store_path);
    assert!(first.shown_sections().is_empty());
    first.expand_uniquely("toggleable_div_install");
    drop(first);

    let second = load_page(&config, &address, &store_path);
    assert_eq!(second.shown_sections(), vec!["toggleable_div_install"]);

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    assert_eq!(
        saved["https://example.org/index.html-toggler-memory-toggleable_div_"],
        "toggleable_div_install"
    );
}

#[test]
fn test_expand_all_survives_reload() {
    let config = TogglerConfig::from_toml_str(CONFIG).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("memory.json");
    let address = "https://example.org/index.html";

    let mut first = load_page(&config, address, &store_path);
    first.expand_all();
    drop(first);

    let mut second = load_page(&config, address, &store_path);
    assert!(second.is_all_expanded());
    assert_eq!(second.shown_sections().len(), 3);

    // 全部展開後點一個，只留下那一個
    second.expand_uniquely("toggleable_div_faq");
    assert_eq!(second.shown_sections(), vec!["toggleable_div_faq"]);
}

#[test]
fn test_query_shorthand_from_config() {
    let config = TogglerConfig::from_toml_str(CONFIG).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("memory.json");

    let toggler = load_page(&config, "https://example.org/index.html?about", &store_path);
    assert_eq!(toggler.shown_sections(), vec!["toggleable_div_about"]);

    let toggler = load_page(
        &config,
        "https://example.org/index.html?about&everything",
        &store_path,
    );
    assert!(toggler.is_all_expanded());
}

#[test]
fn test_list_parameter_from_config() {
    let config = TogglerConfig::from_toml_str(CONFIG).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("memory.json");

    let toggler = load_page(
        &config,
        "https://example.org/index.html?expanded=about,install",
        &store_path,
    );
    assert_eq!(
        toggler.shown_sections(),
        vec!["toggleable_div_about", "toggleable_div_install"]
    );
    assert_eq!(
        toggler.snapshot().remembered.as_deref(),
        Some("toggleable_div_install")
    );
}

#[test]
fn test_snapshot_serializes() {
    let config = TogglerConfig::from_toml_str(CONFIG).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("memory.json");

    let mut toggler = load_page(&config, "https://example.org/index.html", &store_path);
    toggler.toggle("toggleable_div_about");

    let json = serde_json::to_value(toggler.snapshot()).unwrap();
    assert_eq!(json["all_expanded"], false);
    assert_eq!(json["remembered"], "toggleable_div_about");
    assert_eq!(json["sections"][0]["id"], "toggleable_div_about");
    assert_eq!(json["sections"][0]["shown"], true);
    assert_eq!(json["sections"][1]["shown"], false);
}

#[test]
fn test_garbage_store_file_still_loads_page() {
    let config = TogglerConfig::from_toml_str(CONFIG).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("memory.json");
    std::fs::write(&store_path, "not json").unwrap();
    let options = config.to_options().unwrap();

    let navigation = UrlNavigation::parse("https://example.org/index.html?about").unwrap();
    let store = JsonFileStore::open_or_unavailable(&store_path);
    let mut toggler = Toggler::new(options.clone(), config.build_page(), store, &navigation);
    assert_eq!(toggler.shown_sections(), vec!["toggleable_div_about"]);
    assert_eq!(toggler.snapshot().remembered, None);

    // 沒有 query 時維持頁面預設狀態
    let navigation = UrlNavigation::parse("https://example.org/index.html").unwrap();
    let store = JsonFileStore::open_or_unavailable(&store_path);
    let mut toggler2 = Toggler::new(options, config.build_page(), store, &navigation);
    assert!(toggler2.shown_sections().is_empty());
    assert_eq!(
        toggler2.directory().style("toggleable_div_faq", "display"),
        Some("none")
    );

    toggler.expand_all();
    toggler2.toggle("toggleable_div_faq");
    assert!(toggler2.is_shown("toggleable_div_faq"));
    assert_eq!(std::fs::read_to_string(&store_path).unwrap(), "not json");
}
