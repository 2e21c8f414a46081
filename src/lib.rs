// Chipbox - terminal autocomplete widgets
// Library exports

pub mod cli;
pub mod config;
pub mod logging;
pub mod widgets;
