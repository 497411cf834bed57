/// PNG 出力の定義（ファイル名と出力サイズ）
///
/// 全エントリで width == height（favicon は正方形のみ）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
}

/// ICO 出力の定義（1ファイルに複数解像度を埋め込む）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcoSpec {
    pub file_name: &'static str,
    pub sizes: &'static [u32],
}

/// 生成する PNG favicon の一覧（固定）
pub const PNG_SPECS: [SizeSpec; 5] = [
    SizeSpec {
        file_name: "favicon-16x16.png",
        width: 16,
        height: 16,
    },
    SizeSpec {
        file_name: "favicon-32x32.png",
        width: 32,
        height: 32,
    },
    SizeSpec {
        file_name: "apple-touch-icon.png",
        width: 180,
        height: 180,
    },
    SizeSpec {
        file_name: "android-chrome-192x192.png",
        width: 192,
        height: 192,
    },
    SizeSpec {
        file_name: "android-chrome-512x512.png",
        width: 512,
        height: 512,
    },
];

/// 生成する ICO の定義（16x16 と 32x32 を同梱）
pub const FAVICON_ICO: IcoSpec = IcoSpec {
    file_name: "favicon.ico",
    sizes: &[16, 32],
};
