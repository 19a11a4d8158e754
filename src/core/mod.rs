pub mod memory;
pub mod toggler;

pub use crate::domain::model::{ControlStyle, Selection, Shorthands, TogglerSnapshot, Visibility};
pub use crate::domain::ports::{ElementDirectory, KeyValueStore, NavigationSource};
pub use crate::utils::error::Result;
