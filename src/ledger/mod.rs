pub mod normalize;
pub mod queries;
pub mod store;
