pub mod config;
pub mod consts;
pub mod core_types;
pub mod decor;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod session;
pub mod tone;
// cmd and reports are binary modules (declared in main.rs).
