//! Terminal front end for the registration form.

pub mod commands;
pub mod logging;
pub mod render;
pub mod script;
pub mod settings;
