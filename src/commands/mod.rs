pub mod desktop;
pub mod launcher;
pub mod logging;
pub mod window;
