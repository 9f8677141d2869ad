pub mod badge;
pub mod button;
pub mod input;
pub mod label;
pub mod select;
pub mod textarea;

pub use badge::{Badge, SeverityBadge};
pub use button::Button;
pub use input::Input;
pub use label::Label;
pub use select::{Select, SelectOption};
pub use textarea::Textarea;
