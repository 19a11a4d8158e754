use section_toggler::{
    ControlStyle, InMemoryPage, InMemoryStore, Shorthands, Toggler, TogglerOptions, UrlNavigation,
};

const PAGE: &str = "https://example.org/notes.html";
const KEY: &str = "https://example.org/notes.html-toggler-memory-sec_";

fn options() -> TogglerOptions {
    TogglerOptions::new(
        "sec_",
        ControlStyle::from_colors("maroon", "gray"),
        Shorthands::new(),
    )
}

fn page() -> InMemoryPage {
    InMemoryPage::new()
        .with_section("sec_a", Some(false))
        .with_section("sec_b", Some(false))
}

fn load(store: InMemoryStore) -> Toggler<InMemoryPage, InMemoryStore> {
    let navigation = UrlNavigation::parse(PAGE).unwrap();
    Toggler::new(options(), page(), store, &navigation)
}

#[test]
fn test_restore_all_matches_expand_all() {
    let restored = load(InMemoryStore::new().with_value(KEY, ":all:"));

    let mut direct = load(InMemoryStore::new());
    direct.expand_all();

    assert!(restored.is_all_expanded());
    assert_eq!(restored.shown_sections(), vec!["sec_a", "sec_b"]);
    assert_eq!(restored.snapshot(), direct.snapshot());
    assert_eq!(restored.directory().elements(), direct.directory().elements());
}

#[test]
fn test_restore_none_matches_collapse_all() {
    let restored = load(InMemoryStore::new().with_value(KEY, ":none:"));

    let mut direct = load(InMemoryStore::new());
    direct.collapse_all();

    assert!(restored.shown_sections().is_empty());
    assert_eq!(restored.snapshot(), direct.snapshot());
    assert_eq!(restored.directory().elements(), direct.directory().elements());
}

#[test]
fn test_restore_section_matches_expand_uniquely_from_nothing() {
    let restored = load(InMemoryStore::new().with_value(KEY, "sec_b"));

    let mut direct = load(InMemoryStore::new());
    direct.collapse_all();
    direct.expand_uniquely("sec_b");

    assert_eq!(restored.shown_sections(), vec!["sec_b"]);
    assert_eq!(restored.store().value(KEY), Some("sec_b"));
    assert_eq!(restored.snapshot(), direct.snapshot());
    assert_eq!(restored.directory().elements(), direct.directory().elements());
}

#[test]
fn test_restore_unknown_section_leaves_page_alone() {
    let restored = load(InMemoryStore::new().with_value(KEY, "sec_gone"));

    assert!(restored.shown_sections().is_empty());
    assert_eq!(restored.store().value(KEY), Some("sec_gone"));
    assert_eq!(restored.directory().style("sec_a_button", "border-color"), None);
}

#[test]
fn test_restore_with_unavailable_store() {
    let restored = load(InMemoryStore::unavailable());

    assert!(restored.shown_sections().is_empty());
    assert!(!restored.is_all_expanded());
    assert_eq!(restored.directory().style("sec_a", "display"), Some("none"));
}

#[test]
fn test_query_overrides_memory() {
    let address = "https://example.org/notes.html?b";
    let key = format!("{}-toggler-memory-sec_", address);
    let navigation = UrlNavigation::parse(address).unwrap();
    let shorthands: Shorthands = [("b", "sec_b")].into_iter().collect();

    let toggler = Toggler::new(
        TogglerOptions::new("sec_", ControlStyle::from_colors("maroon", "gray"), shorthands),
        page(),
        InMemoryStore::new().with_value(&key, ":all:"),
        &navigation,
    );

    assert!(!toggler.is_all_expanded());
    assert_eq!(toggler.shown_sections(), vec!["sec_b"]);
    assert_eq!(toggler.store().value(&key), Some("sec_b"));
}

#[test]
fn test_scoped_keys_keep_togglers_apart() {
    let mut page = InMemoryPage::new();
    page.add_section("sec_a", Some(false));
    page.add_section("faq_a", Some(false));
    let navigation = UrlNavigation::parse(PAGE).unwrap();

    let mut sections = Toggler::new(options(), page, InMemoryStore::new(), &navigation);
    sections.expand_all();
    let (page, store) = sections.into_parts();

    let faq_options = TogglerOptions::new(
        "faq_",
        ControlStyle::from_colors("maroon", "gray"),
        Shorthands::new(),
    );
    let mut faq = Toggler::new(faq_options, page, store, &navigation);
    faq.expand_uniquely("faq_a");

    assert_eq!(faq.store().value(KEY), Some(":all:"));
    assert_eq!(
        faq.store().value("https://example.org/notes.html-toggler-memory-faq_"),
        Some("faq_a")
    );
    assert_eq!(faq.store().len(), 2);
}

#[test]
fn test_legacy_key_and_button_look() {
    let navigation = UrlNavigation::parse(PAGE).unwrap();
    let store =
        InMemoryStore::new().with_value("https://example.org/notes.html-toggler-memory", "sec_a");

    let toggler = Toggler::new(options().with_legacy_memory_key(), page(), store, &navigation);

    assert_eq!(toggler.memory_key(), "https://example.org/notes.html-toggler-memory");
    assert_eq!(toggler.shown_sections(), vec!["sec_a"]);

    let page = toggler.directory();
    assert_eq!(page.style("sec_a_button", "border-color"), Some("maroon"));
    assert_eq!(page.style("sec_a_button", "background-color"), Some("white"));
    assert_eq!(page.style("sec_b_button", "border-color"), Some("gray"));
    assert_eq!(page.style("sec_b_button", "background-color"), Some("#f0f0f0"));
    assert_eq!(page.style("sec_b_button", "border-radius"), Some("4px"));
}

#[test]
fn test_custom_section_tag() {
    let mut page = InMemoryPage::new();
    page.add_bare_section("section", "sec_a", Some(false));
    page.add_bare_section("div", "sec_b", Some(false));
    let navigation = UrlNavigation::parse(PAGE).unwrap();

    let mut toggler = Toggler::new(
        options().with_section_tag("section"),
        page,
        InMemoryStore::new(),
        &navigation,
    );
    toggler.expand_all();

    assert_eq!(toggler.section_ids(), ["sec_a"]);
    assert!(!toggler.is_shown("sec_b"));
}
