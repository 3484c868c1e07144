pub mod api;
pub mod export;
pub mod state;
pub mod ui;
