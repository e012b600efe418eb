pub mod ring;
pub mod tooltip;
