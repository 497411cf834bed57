use std::fs;
use std::path::Path;

use favicon_core::{
    compose_centered, decode_image, encode_ico, encode_png, thumbnail, TransformError,
    FAVICON_ICO, PNG_SPECS,
};

/// 元ロゴの既定パス
pub const SOURCE_PATH: &str = "image/logo.png";

/// 出力先ディレクトリの既定パス
pub const OUTPUT_DIR: &str = "image";

/// favicon 生成の統合エラー型
#[derive(Debug, thiserror::Error)]
pub enum FaviconError {
    #[error("source image not found: {path}")]
    SourceNotFound { path: String },

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 1枚のロゴ画像から favicon 一式を生成する
///
/// 各 PNG はアスペクト比を維持して縮小し、透明な正方キャンバスの
/// 中央に合成して書き出す。最後に 16x16 と 32x32 を同梱した
/// favicon.ico を書き出す。
/// ソースが存在しない場合は出力ディレクトリに一切書き込まない
pub fn generate(source_path: &Path, output_dir: &Path) -> Result<(), FaviconError> {
    if !source_path.exists() {
        tracing::warn!(path = %source_path.display(), "source image not found, nothing to do");
        return Err(FaviconError::SourceNotFound {
            path: source_path.display().to_string(),
        });
    }

    tracing::info!(path = %source_path.display(), "loading source image");
    let input = fs::read(source_path)?;
    let img = decode_image(&input)?;

    fs::create_dir_all(output_dir)?;

    for spec in &PNG_SPECS {
        let scaled = thumbnail(&img, spec.width, spec.height)?;
        let canvas = compose_centered(&scaled, spec.width, spec.height);
        let bytes = encode_png(&canvas)?;

        let output_path = output_dir.join(spec.file_name);
        fs::write(&output_path, bytes)?;
        tracing::info!(
            path = %output_path.display(),
            w = spec.width,
            h = spec.height,
            "wrote favicon"
        );
    }

    // ICO の各解像度はソースから独立に再生成する（キャンバス合成なし）
    let ico_bytes = encode_ico(&img, FAVICON_ICO.sizes)?;
    let ico_path = output_dir.join(FAVICON_ICO.file_name);
    fs::write(&ico_path, ico_bytes)?;
    tracing::info!(path = %ico_path.display(), "wrote multi-resolution icon");

    tracing::info!("all favicons generated");
    Ok(())
}
