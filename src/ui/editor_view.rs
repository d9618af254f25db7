use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::{Colors, frame};
use crate::pager;

/// テキストペインの幅（桁数）。右端に固定で確保する
pub const TEXT_PANE_WIDTH: u16 = 24;

/// HEX/テキストの2ペイン表示ウィジェット
///
/// セルの計算はframeモジュールに任せ、ここでは配置と配色だけを行う。
pub struct EditorView<'a> {
    /// 表示するデータ
    data: &'a [u8],
    /// カーソル位置
    cursor: usize,
    /// 先頭に表示する行
    scroll: usize,
}

impl<'a> EditorView<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, cursor: 0, scroll: 0 }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    fn cell_style(is_cursor: bool) -> Style {
        if is_cursor {
            Style::default().fg(Colors::CURSOR)
        } else {
            Style::default().fg(Colors::NORMAL)
        }
    }
}

impl Widget for EditorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width <= TEXT_PANE_WIDTH || area.height == 0 {
            return;
        }

        let hex_width = (area.width - TEXT_PANE_WIDTH) as usize;
        let hex_cols = pager::cells_per_row(hex_width, pager::HEX_CELL_WIDTH);
        let text_cols = pager::cells_per_row(TEXT_PANE_WIDTH as usize, pager::TEXT_CELL_WIDTH);
        let rows = pager::visible_rows(self.scroll, area.height as usize);

        // ペインごとにセル数が違うので、同じバイト範囲でも行の割り付けは別々になる
        for cell in frame::hex_cells(self.data, self.cursor, hex_cols, rows.clone()) {
            let x = area.x + (cell.column * pager::HEX_CELL_WIDTH) as u16;
            let y = area.y + cell.row as u16;
            buf.set_string(x, y, &cell.glyph, Self::cell_style(cell.is_cursor));
        }

        let text_x = area.x + area.width - TEXT_PANE_WIDTH;
        for cell in frame::text_cells(self.data, self.cursor, text_cols, rows) {
            let x = text_x + (cell.column * pager::TEXT_CELL_WIDTH) as u16;
            let y = area.y + cell.row as u16;
            buf.set_string(x, y, &cell.glyph, Self::cell_style(cell.is_cursor));
        }
    }
}
