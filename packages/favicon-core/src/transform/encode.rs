use crate::errors::TransformError;
use crate::transform::resize::thumbnail;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, RgbaImage};
use std::io::Cursor;

/// 画像を PNG にエンコードする
///
/// 圧縮率最優先・適応フィルタ（元スクリプトの optimize 相当）。
/// 設定が固定のため出力バイト列は決定的
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, TransformError> {
    let mut buf = Cursor::new(Vec::new());

    let encoder = PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive);
    img.write_with_encoder(encoder)
        .map_err(|e| TransformError::EncodeFailed(format!("PNG encode failed: {e}")))?;

    Ok(buf.into_inner())
}

/// 複数解像度を1ファイルに同梱した ICO にエンコードする
///
/// 各サイズのサムネイルをソースから独立に生成して同梱する
/// （キャンバス合成はしない）
pub fn encode_ico(source: &DynamicImage, sizes: &[u32]) -> Result<Vec<u8>, TransformError> {
    let mut dir = ico::IconDir::new(ico::ResourceType::Icon);

    for &size in sizes {
        let thumb = thumbnail(source, size, size)?;
        let (w, h) = thumb.dimensions();

        let icon_image = ico::IconImage::from_rgba_data(w, h, thumb.into_raw());
        let entry = ico::IconDirEntry::encode(&icon_image)
            .map_err(|e| TransformError::EncodeFailed(format!("ICO entry encode failed: {e}")))?;
        dir.add_entry(entry);
    }

    let mut buf = Vec::new();
    dir.write(&mut buf)
        .map_err(|e| TransformError::EncodeFailed(format!("ICO encode failed: {e}")))?;

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_encode_png() {
        let img = RgbaImage::new(10, 10);
        let data = encode_png(&img).unwrap();

        assert!(!data.is_empty());
        // PNG マジックナンバー確認
        assert_eq!(&data[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_png_deterministic() {
        let img = RgbaImage::from_pixel(32, 32, Rgba([10, 20, 30, 255]));
        let first = encode_png(&img).unwrap();
        let second = encode_png(&img).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_encode_ico_two_entries() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            256,
            256,
            Rgba([0, 128, 255, 255]),
        ));
        let data = encode_ico(&source, &[16, 32]).unwrap();

        // ICO マジックナンバー確認
        assert_eq!(&data[0..4], &[0x00, 0x00, 0x01, 0x00]);

        let dir = ico::IconDir::read(Cursor::new(&data)).unwrap();
        assert_eq!(dir.entries().len(), 2);
        assert_eq!(dir.entries()[0].width(), 16);
        assert_eq!(dir.entries()[0].height(), 16);
        assert_eq!(dir.entries()[1].width(), 32);
        assert_eq!(dir.entries()[1].height(), 32);
    }
}
