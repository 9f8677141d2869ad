pub mod copy_button;
pub mod coverage_bar;
pub mod page_header;
pub mod progress_bar;
pub mod stat_card;
pub mod ui;

pub use copy_button::CopyButton;
pub use coverage_bar::{share_percent, BarDatum, CoverageBars};
pub use page_header::PageHeader;
pub use progress_bar::ProgressBar;
pub use stat_card::{StatCard, StatTone};
