pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::navigation::UrlNavigation;
pub use crate::adapters::page::InMemoryPage;
pub use crate::adapters::store::{InMemoryStore, JsonFileStore};
pub use crate::config::TogglerConfig;
pub use crate::core::toggler::{Toggler, TogglerOptions};
pub use crate::domain::model::{ControlStyle, Selection, Shorthands, TogglerSnapshot, Visibility};
pub use crate::utils::error::{Result, TogglerError};

#[cfg(feature = "web")]
pub use crate::adapters::web::WebToggler;
