pub mod builder;
pub mod node_model;
