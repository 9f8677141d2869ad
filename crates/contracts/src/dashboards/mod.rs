pub mod d410_threat_timeline;
pub mod d420_ioc_search;
pub mod d430_mitre_attack;
pub mod d440_ir_playbooks;
