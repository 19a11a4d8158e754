use crate::domain::model::Selection;

pub const MEMORY_SUFFIX: &str = "-toggler-memory";
pub const ALL_SENTINEL: &str = ":all:";
pub const NONE_SENTINEL: &str = ":none:";

/// Storage key for a page. With a prefix, several togglers on one page
/// keep separate records.
pub fn memory_key(address: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) => format!("{}{}-{}", address, MEMORY_SUFFIX, prefix),
        None => format!("{}{}", address, MEMORY_SUFFIX),
    }
}

pub fn encode(selection: &Selection) -> String {
    match selection {
        Selection::All => ALL_SENTINEL.to_string(),
        Selection::Nothing => NONE_SENTINEL.to_string(),
        Selection::Section(id) => id.clone(),
    }
}

pub fn decode(value: &str) -> Selection {
    match value {
        ALL_SENTINEL => Selection::All,
        NONE_SENTINEL => Selection::Nothing,
        id => Selection::Section(id.to_string()),
    }
}
