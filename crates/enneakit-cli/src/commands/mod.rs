pub mod pools;
pub mod quiz;
pub mod types;
