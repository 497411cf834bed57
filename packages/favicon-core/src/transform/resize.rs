use crate::errors::TransformError;
use crate::transform::dimensions::contain_dimensions;
use fast_image_resize::{images::Image, FilterType, PixelType, ResizeOptions, Resizer};
use image::{DynamicImage, RgbaImage};

/// アスペクト比を維持したサムネイルを生成する
///
/// target_w x target_h に収まるよう縮小する（拡大はしない）。
/// fast_image_resize の Lanczos3 フィルタを使用し、
/// アルファ付き RGBA8 として処理する
pub fn thumbnail(
    img: &DynamicImage,
    target_w: u32,
    target_h: u32,
) -> Result<RgbaImage, TransformError> {
    let rgba = img.to_rgba8();
    let (src_w, src_h) = rgba.dimensions();

    let (dst_w, dst_h) = contain_dimensions(src_w, src_h, target_w, target_h);
    if dst_w == src_w && dst_h == src_h {
        return Ok(rgba);
    }

    // fast_image_resize の Image を作成
    let src_image = Image::from_vec_u8(src_w, src_h, rgba.into_raw(), PixelType::U8x4)
        .map_err(|e| TransformError::ProcessingFailed(format!("failed to create source image: {e}")))?;

    // リサイズ先の Image を作成
    let mut dst_image = Image::new(dst_w, dst_h, PixelType::U8x4);

    // Resizer を作成してリサイズ実行（Lanczos3 フィルタ）
    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new().resize_alg(fast_image_resize::ResizeAlg::Convolution(
                FilterType::Lanczos3,
            )),
        )
        .map_err(|e| TransformError::ProcessingFailed(format!("resize failed: {e}")))?;

    // RgbaImage に変換
    RgbaImage::from_raw(dst_w, dst_h, dst_image.into_vec()).ok_or_else(|| {
        TransformError::ProcessingFailed("failed to convert resized image".to_string())
    })
}
