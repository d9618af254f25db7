//! ビューポートとページ割りの純粋計算
//!
//! バッファ上の1次元オフセットと画面上の (行, 桁) を相互に変換する。
//! 状態を持たず、同じ入力は常に同じ出力を返す。

use std::ops::Range;

/// HEXペインの1セルの表示幅（16進2桁 + 区切りスペース）
pub const HEX_CELL_WIDTH: usize = 3;
/// テキストペインの1セルの表示幅
pub const TEXT_CELL_WIDTH: usize = 1;

/// ペイン幅に収まる1行あたりのセル数（最低1）
pub fn cells_per_row(pane_width: usize, cell_width: usize) -> usize {
    (pane_width / cell_width).max(1)
}

/// 総行数。バイト数がちょうど割り切れる場合も追記位置のために1行余分に数える
pub fn page_count(total_bytes: usize, cells_per_row: usize) -> usize {
    total_bytes / cells_per_row + 1
}

/// オフセットが属する行
pub fn row_for_offset(offset: usize, cells_per_row: usize) -> usize {
    offset / cells_per_row
}

/// オフセットの行内の桁
pub fn column_for_offset(offset: usize, cells_per_row: usize) -> usize {
    offset % cells_per_row
}

/// 行と桁からオフセットへの逆写像
pub fn offset_for_row_column(row: usize, column: usize, cells_per_row: usize) -> usize {
    row * cells_per_row + column
}

/// 見える行の半開区間。区間外の行は描画されない
pub fn visible_rows(scroll_offset: usize, pane_height_rows: usize) -> Range<usize> {
    scroll_offset..scroll_offset + pane_height_rows
}
