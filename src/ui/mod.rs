pub mod app;
pub mod icons;
mod status_panel;
