pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod highlight;
pub mod widget;

pub use components::search_box::SearchBox;
pub use config::{FailureDisplay, ResponseOrdering, SearchConfig};
