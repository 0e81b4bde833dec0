pub mod hit;
pub mod mapper;
pub mod properties;
