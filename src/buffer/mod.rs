//! バイナリバッファモジュール

mod byte_buffer;

pub use byte_buffer::ByteBuffer;

use thiserror::Error;

/// バッファ操作のエラー
#[derive(Debug, Error)]
pub enum BufferError {
    /// 空のファイルは編集対象にしない
    #[error("file is empty")]
    Empty,
    /// 読み書きの失敗
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// 範囲外アクセス（呼び出し側の契約違反）
    #[error("offset {0} out of bounds")]
    OutOfBounds(usize),
}
