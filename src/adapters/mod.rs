// Adapters layer: concrete implementations of the domain ports (page, storage, navigation).

pub mod navigation;
pub mod page;
pub mod store;

#[cfg(feature = "web")]
pub mod web;
