pub mod parameters;
pub mod results;
pub mod status_bar;
pub mod toolbar;
