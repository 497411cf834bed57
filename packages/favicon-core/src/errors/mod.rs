pub mod types;

pub use types::TransformError;
