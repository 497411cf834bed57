use image::imageops;
use image::RgbaImage;

/// 透明な正方キャンバスの中央にサムネイルを合成する
///
/// キャンバスは全ピクセル透明 (0,0,0,0) で初期化し、
/// オフセット ((w - scaled_w) / 2, (h - scaled_h) / 2)（切り捨て除算）に
/// アルファを考慮して貼り付ける。
/// scaled の寸法はキャンバス以下であること（contain_dimensions が保証する）
pub fn compose_centered(scaled: &RgbaImage, canvas_w: u32, canvas_h: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(canvas_w, canvas_h);

    let offset_x = (canvas_w - scaled.width()) / 2;
    let offset_y = (canvas_h - scaled.height()) / 2;

    imageops::overlay(&mut canvas, scaled, i64::from(offset_x), i64::from(offset_y));

    canvas
}
