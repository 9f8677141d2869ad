mod dashboard;
mod phases;
mod resources;

pub use dashboard::IrPlaybookDashboard;
