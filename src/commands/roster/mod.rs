pub mod profile;
pub mod register;
pub mod team;
pub mod update;
