pub mod compose;
pub mod decode;
pub mod dimensions;
pub mod encode;
pub mod resize;

pub use compose::compose_centered;
pub use decode::decode_image;
pub use dimensions::contain_dimensions;
pub use encode::{encode_ico, encode_png};
pub use resize::thumbnail;
