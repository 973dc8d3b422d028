//! Site sections, each bound to the shared coordinator.

mod backdrop;
mod hero;
mod knowledge;
mod loading;
mod navbar;
mod notices;
mod projects;
mod sections;

pub use backdrop::Backdrop;
pub use hero::Hero;
pub use knowledge::Knowledge;
pub use loading::{LoadingScreen, ReloadPrompt};
pub use navbar::{NavLocation, Navbar};
pub use notices::NoticeStack;
pub use projects::Projects;
pub use sections::{About, Contact, Footer};
