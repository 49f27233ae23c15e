pub mod delivery;
pub mod json;
