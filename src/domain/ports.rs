use crate::domain::model::Visibility;
use crate::utils::error::Result;

/// The page's element tree, reduced to what the toggler touches.
///
/// Lookups on missing ids return `None`/`false` rather than failing.
pub trait ElementDirectory {
    /// Ids of all elements with the given tag, in document order.
    fn ids_by_tag(&self, tag: &str) -> Vec<String>;

    fn has_element(&self, id: &str) -> bool;

    fn visibility(&self, id: &str) -> Option<Visibility>;

    /// Returns `false` when no element has this id.
    fn set_visibility(&mut self, id: &str, visibility: Visibility) -> bool;

    /// Returns `false` when no element has this id.
    fn set_style(&mut self, id: &str, property: &str, value: &str) -> bool;
}

/// Per-profile string storage, like a browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// The current page address and its query parameters.
pub trait NavigationSource {
    fn address(&self) -> String;

    /// Presence check; `?x` and `?x=` both count.
    fn has_parameter(&self, name: &str) -> bool;

    fn parameter(&self, name: &str) -> Option<String>;
}
