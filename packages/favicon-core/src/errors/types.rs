use thiserror::Error;

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("decode failed: {0}")]
    DecodeFailed(String),

    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    #[error("encode failed: {0}")]
    EncodeFailed(String),
}
