//! Terminal interface: keypad and history views.

mod app;
mod palette;
mod screens;

pub use app::run;
