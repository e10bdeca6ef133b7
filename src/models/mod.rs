pub mod range;
pub mod settings;
pub mod shift;
pub mod summary;
