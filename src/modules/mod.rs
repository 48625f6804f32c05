pub mod app_edit;
pub mod app_launcher;
pub mod header_bar;
