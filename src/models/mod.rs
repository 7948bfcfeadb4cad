pub mod event;
pub mod meal;
pub mod status;
pub mod user;
