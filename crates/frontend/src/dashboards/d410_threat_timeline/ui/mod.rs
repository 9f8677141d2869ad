mod campaigns;
mod dashboard;
mod event_list;

pub use dashboard::ThreatTimelineDashboard;
