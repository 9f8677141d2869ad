pub mod d410_threat_timeline;
pub mod d420_ioc_search;
pub mod d430_mitre_attack;
pub mod d440_ir_playbooks;

pub use d410_threat_timeline::ui::ThreatTimelineDashboard;
pub use d420_ioc_search::ui::IocSearchDashboard;
pub use d430_mitre_attack::ui::MitreAttackDashboard;
pub use d440_ir_playbooks::ui::IrPlaybookDashboard;
