pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod filter_options;
pub mod icons;
pub mod theme;
