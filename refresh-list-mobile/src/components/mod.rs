//! Refresh list components

pub mod activity_indicator;
pub mod back_top;
pub mod refresh_list_container;

pub use activity_indicator::ActivityIndicator;
pub use back_top::BackTop;
pub use refresh_list_container::RefreshListContainer;
