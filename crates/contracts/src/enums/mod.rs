pub mod detection_coverage;
pub mod ioc_type;
pub mod severity;

pub use detection_coverage::DetectionCoverage;
pub use ioc_type::IocType;
pub use severity::Severity;
