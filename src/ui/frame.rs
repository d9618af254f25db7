//! 描画セルの導出
//!
//! バッファとページ割りの状態から、各ペインに置くセルの並びを計算する。
//! 描画プリミティブには触れない純粋な層で、実際の描き込みはEditorViewが行う。

use std::ops::Range;

use crate::pager;

/// ペインに置く1セル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneCell {
    /// ペイン内の画面行（スクロール適用後、0始まり）
    pub row: usize,
    /// ペイン内の桁
    pub column: usize,
    /// 表示文字列
    pub glyph: String,
    /// カーソル位置のセルかどうか
    pub is_cursor: bool,
}

/// HEXペインのセル列を導出（16進2桁 + 区切りスペース、小文字）
pub fn hex_cells(
    data: &[u8],
    cursor: usize,
    cells_per_row: usize,
    rows: Range<usize>,
) -> Vec<PaneCell> {
    cells(data, cursor, cells_per_row, rows, |byte| format!("{:02x} ", byte))
}

/// テキストペインのセル列を導出（表示可能文字以外は '.'）
pub fn text_cells(
    data: &[u8],
    cursor: usize,
    cells_per_row: usize,
    rows: Range<usize>,
) -> Vec<PaneCell> {
    cells(data, cursor, cells_per_row, rows, |byte| {
        if byte.is_ascii_graphic() {
            (byte as char).to_string()
        } else {
            ".".to_string()
        }
    })
}

/// 見える行だけを走査してセルを集める。len 以降のオフセットは描かない
fn cells(
    data: &[u8],
    cursor: usize,
    cells_per_row: usize,
    rows: Range<usize>,
    glyph: impl Fn(u8) -> String,
) -> Vec<PaneCell> {
    let mut out = Vec::new();
    for (screen_row, row) in rows.enumerate() {
        for column in 0..cells_per_row {
            let offset = pager::offset_for_row_column(row, column, cells_per_row);
            if offset >= data.len() {
                break;
            }
            out.push(PaneCell {
                row: screen_row,
                column,
                glyph: glyph(data[offset]),
                is_cursor: offset == cursor,
            });
        }
    }
    out
}

/// ステータス行の文字列（毎フレーム計算し直す）
pub fn status_line(
    row_width: usize,
    nbytes: usize,
    npages: usize,
    pos: usize,
    mode: &str,
) -> String {
    format!(
        "[view {}] [nbytes {}] [npages {}] [pos {}] [mode {}]",
        row_width, nbytes, npages, pos, mode
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_glyphs_are_lowercase_pairs_with_separator() {
        let cells = hex_cells(&[0xAF, 0x05], 0, 8, 0..1);
        assert_eq!(cells[0].glyph, "af ");
        assert_eq!(cells[1].glyph, "05 ");
    }

    #[test]
    fn text_glyphs_use_placeholder_for_non_graphic_bytes() {
        let cells = text_cells(b"A \x00\x7f", 0, 8, 0..1);
        assert_eq!(cells[0].glyph, "A");
        // スペースは isgraph 相当では表示可能に数えない
        assert_eq!(cells[1].glyph, ".");
        assert_eq!(cells[2].glyph, ".");
        assert_eq!(cells[3].glyph, ".");
    }

    #[test]
    fn exactly_one_cell_is_the_cursor_cell() {
        let cells = hex_cells(&[1, 2, 3, 4, 5], 3, 2, 0..3);
        let marked: Vec<_> = cells.iter().filter(|c| c.is_cursor).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].row, 1);
        assert_eq!(marked[0].column, 1);
    }

    #[test]
    fn append_point_cursor_is_not_drawn() {
        let data = [1u8, 2, 3];
        let cells = hex_cells(&data, data.len(), 8, 0..2);
        assert_eq!(cells.len(), 3);
        assert!(cells.iter().all(|c| !c.is_cursor));
    }

    #[test]
    fn rows_outside_the_visible_interval_produce_no_cells() {
        let data = [0u8; 32];
        let cells = hex_cells(&data, 0, 8, 1..3);
        // 行1と行2のセルだけが、画面行0と1として出てくる
        assert_eq!(cells.len(), 16);
        assert!(cells.iter().all(|c| c.row < 2));
    }

    #[test]
    fn last_partial_row_stops_at_len() {
        let data = [0u8; 10];
        let cells = hex_cells(&data, 0, 8, 0..4);
        assert_eq!(cells.len(), 10);
        let last = cells.last().unwrap();
        assert_eq!(last.row, 1);
        assert_eq!(last.column, 1);
    }

    #[test]
    fn panes_lay_out_the_same_bytes_independently() {
        let data = [0u8; 30];
        // HEXペインは8セル/行、テキストペインは24セル/行で行数が違う
        let hex = hex_cells(&data, 0, 8, 0..10);
        let text = text_cells(&data, 0, 24, 0..10);
        assert_eq!(hex.len(), text.len());
        assert_eq!(hex.iter().map(|c| c.row).max(), Some(3));
        assert_eq!(text.iter().map(|c| c.row).max(), Some(1));
    }

    #[test]
    fn status_line_matches_the_expected_format() {
        assert_eq!(
            status_line(16, 258, 17, 42, "hex"),
            "[view 16] [nbytes 258] [npages 17] [pos 42] [mode hex]"
        );
    }
}
