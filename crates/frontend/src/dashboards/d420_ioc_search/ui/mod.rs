mod bulk_check;
mod dashboard;
mod enrichment;
mod feeds;
mod search_results;

pub use dashboard::IocSearchDashboard;
