mod dashboard;
mod gaps;
mod matrix;
mod overview;
mod threat_actors;

pub use dashboard::MitreAttackDashboard;
