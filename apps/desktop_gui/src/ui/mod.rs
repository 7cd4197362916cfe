//! UI layer for the desktop client: app shell, views, widgets and theme.

pub mod app;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::BigHouseApp;
