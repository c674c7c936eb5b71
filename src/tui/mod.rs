//! Terminal front end: a menu scene for settings and a table scene that deals
//! and scores shows while tracking running statistics.

pub mod app;
pub mod controller;
pub mod ui;
