pub mod errors;
pub mod specs;
pub mod transform;

// 公開API
pub use errors::TransformError;
pub use specs::{IcoSpec, SizeSpec, FAVICON_ICO, PNG_SPECS};
pub use transform::{
    compose_centered, contain_dimensions, decode_image, encode_ico, encode_png, thumbnail,
};
