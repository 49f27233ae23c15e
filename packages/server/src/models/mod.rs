pub mod health;
pub mod join;
pub mod team;
