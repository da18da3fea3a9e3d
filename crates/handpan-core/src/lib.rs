pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod frame;
pub mod gesture;
pub mod io;
pub mod keymap;
pub mod overlay;
pub mod resample;
pub mod roi;

pub use controller::ViewportController;
