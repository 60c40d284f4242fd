//! CLI-facing commands. Each one builds its collaborators from [`Config`],
//! drives an application action and prints the result.

mod check;
pub mod config;
mod details;
mod install;
mod list;
mod refresh;
mod remove;
mod search;
pub mod services;
mod upgrade;

pub use check::check;
pub use config::Config;
pub use details::details;
pub use install::install;
pub use list::list;
pub use refresh::refresh;
pub use remove::remove;
pub use search::search;
pub use upgrade::upgrade;
