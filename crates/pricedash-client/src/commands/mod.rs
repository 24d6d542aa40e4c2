pub mod chart;
pub mod common;
pub mod dash;
pub mod items;
