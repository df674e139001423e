pub mod config;
pub mod machine;
pub mod resource;
pub mod schema;
pub mod status;
