pub mod calculator;
pub mod cities;
pub mod lead_form;
