//! Custom widget components

mod details;
mod diagram;
mod form;
mod header;
mod history;
mod raw;
mod stats;
mod tabs;

pub use details::DetailsView;
pub use diagram::DiagramView;
pub use form::DesignFormView;
pub use header::MainHeader;
pub use history::HistoryList;
pub use raw::RawView;
pub use stats::StatsCards;
pub use tabs::ResultTabsBar;
