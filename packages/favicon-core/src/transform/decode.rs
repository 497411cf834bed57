use crate::errors::TransformError;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;

/// 画像バイト列をデコードする
///
/// フォーマットはマジックナンバーから推測する
pub fn decode_image(input: &[u8]) -> Result<DynamicImage, TransformError> {
    let reader = ImageReader::new(Cursor::new(input))
        .with_guessed_format()
        .map_err(|e| TransformError::DecodeFailed(format!("failed to guess format: {e}")))?;

    reader
        .decode()
        .map_err(|e| TransformError::DecodeFailed(format!("decode failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    #[test]
    fn test_decode_png() {
        let img = DynamicImage::new_rgba8(8, 4);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();

        let decoded = decode_image(buf.get_ref()).unwrap();
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 4);
    }

    #[test]
    fn test_decode_invalid_data() {
        let result = decode_image(b"not an image");
        assert!(result.is_err());
    }
}
