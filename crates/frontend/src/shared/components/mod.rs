pub mod toolbar;
pub mod ui;
