pub mod search_box;
pub mod search_results;
