/// 縮小倍率を計算する（拡大はしない）
///
/// アスペクト比を維持しつつ、指定された領域に収まる最大の倍率を返す（最大1.0）
fn calculate_scale_factor(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> f64 {
    let scale_w = target_w as f64 / src_w as f64;
    let scale_h = target_h as f64 / src_h as f64;

    // 小さい方の倍率を採用し、拡大は防止（最大1.0）
    scale_w.min(scale_h).min(1.0)
}

/// 倍率を適用して新しい寸法を計算する
fn apply_scale(src_w: u32, src_h: u32, scale: f64) -> (u32, u32) {
    let new_w = (src_w as f64 * scale).round() as u32;
    let new_h = (src_h as f64 * scale).round() as u32;

    // 最小1pxを保証
    (new_w.max(1), new_h.max(1))
}

/// Contain モードの寸法を計算する
///
/// アスペクト比を維持しつつ、target_w x target_h の領域に収まるサイズを返す。
/// 元画像より大きくはしない（サムネイル挙動）
pub fn contain_dimensions(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> (u32, u32) {
    let scale = calculate_scale_factor(src_w, src_h, target_w, target_h);
    apply_scale(src_w, src_h, scale)
}
