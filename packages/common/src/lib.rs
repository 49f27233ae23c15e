pub mod application;
pub mod team;

pub use application::Application;
pub use team::{Team, display_team};
