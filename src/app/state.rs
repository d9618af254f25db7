use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Paragraph,
};

use super::{Action, InputState, Mode};
use crate::buffer::{BufferError, ByteBuffer};
use crate::pager;
use crate::ui::{Colors, EditorView, TEXT_PANE_WIDTH, frame::status_line};

/// アプリケーション状態
///
/// セッションが持つ可変状態はすべてここに集まる。グローバルは持たない。
pub struct App {
    /// 編集中のバッファ
    buffer: ByteBuffer,
    /// カーソル位置（len と等しいときは追記位置）
    cursor: usize,
    /// 先頭に表示する行
    scroll: usize,
    /// HEXペインの1行あたりのセル数（直近の描画サイズから算出）
    row_width: usize,
    /// 表示可能な行数
    visible_rows: usize,
    /// 編集モード
    mode: Mode,
    /// 入力状態
    input_state: InputState,
    /// 終了フラグ
    should_quit: bool,
    /// 終了時に保存するか
    save_on_exit: bool,
}

impl App {
    /// 読み込み済みのバッファからセッションを開始
    pub fn new(buffer: ByteBuffer) -> Self {
        Self {
            buffer,
            cursor: 0,
            scroll: 0,
            row_width: 16,
            visible_rows: 24,
            mode: Mode::Hex,
            input_state: InputState::Normal,
            should_quit: false,
            save_on_exit: false,
        }
    }

    /// 終了すべきかどうか
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 終了時の保存が要求されたかどうか
    pub fn save_on_exit(&self) -> bool {
        self.save_on_exit
    }

    /// バッファを元のファイルに書き戻す
    pub fn save(&self) -> Result<(), BufferError> {
        self.buffer.save()
    }

    /// アクションを実行
    pub fn execute(&mut self, action: Action) {
        // 2桁目の入力以外は何であれ保留中のニブルを破棄する
        if !matches!(action, Action::InputHex(_)) {
            self.input_state = InputState::Normal;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::SaveAndQuit => {
                self.save_on_exit = true;
                self.should_quit = true;
            }
            Action::CursorUp => self.cursor = self.cursor.saturating_sub(self.row_width),
            Action::CursorDown => {
                self.cursor = (self.cursor + self.row_width).min(self.buffer.len());
            }
            Action::CursorLeft => self.cursor = self.cursor.saturating_sub(1),
            Action::CursorRight => self.cursor = (self.cursor + 1).min(self.buffer.len()),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(self.visible_rows.max(1)),
            Action::ScrollDown => self.scroll_down(),
            Action::ToggleMode => self.mode = self.mode.toggle(),
            Action::Delete => self.delete(),
            Action::InputHex(ch) => self.input_hex(ch),
            Action::InputText(ch) => self.input_text(ch),
            Action::None => {}
        }
    }

    /// 1画面分下にスクロール（カーソルは動かさない）
    fn scroll_down(&mut self) {
        let last_row = pager::page_count(self.buffer.len(), self.row_width) - 1;
        self.scroll = (self.scroll + self.visible_rows.max(1)).min(last_row);
    }

    /// HEX入力処理
    fn input_hex(&mut self, ch: char) {
        let Some(digit) = ch.to_digit(16) else {
            return;
        };
        let digit = digit as u8;

        match self.input_state {
            InputState::Normal => {
                // 1桁目は保留するだけで、バッファにはまだ何も書かない
                self.input_state = InputState::PendingNibble(digit);
            }
            InputState::PendingNibble(high) => {
                // 2桁目で1バイトに合成して書き込む
                let value = (high << 4) | digit;
                let _ = self.buffer.set_or_append(self.cursor, value);
                self.cursor = (self.cursor + 1).min(self.buffer.len());
                self.input_state = InputState::Normal;
            }
        }
    }

    /// TEXT入力処理（1セルは1バイトなので印字可能なASCIIだけを受け付ける）
    fn input_text(&mut self, ch: char) {
        if !ch.is_ascii() || ch.is_ascii_control() {
            return;
        }
        let _ = self.buffer.set_or_append(self.cursor, ch as u8);
        self.cursor = (self.cursor + 1).min(self.buffer.len());
    }

    /// カーソル位置のバイトを削除してカーソルを1つ戻す
    fn delete(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        if self.cursor < self.buffer.len() {
            let _ = self.buffer.delete_at(self.cursor);
        }
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// 描画サイズからペイン幾何を更新
    fn set_view_size(&mut self, width: u16, height: u16) {
        let hex_width = (width as usize).saturating_sub(TEXT_PANE_WIDTH as usize);
        self.row_width = pager::cells_per_row(hex_width, pager::HEX_CELL_WIDTH);
        // ステータス行とその下の空行の分を引く
        self.visible_rows = (height as usize).saturating_sub(2);
    }

    /// イベントを処理
    pub fn handle_event(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(());
                }
                self.execute(Action::from_key(key.code, self.mode));
            }
        }
        Ok(())
    }

    /// UIを描画
    pub fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();
        self.set_view_size(size.width, size.height);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // ステータス
                Constraint::Length(1), // 空行
                Constraint::Min(1),    // ペイン
            ])
            .split(size);

        // ステータス行は毎フレーム現在の状態から計算し直す
        let status = status_line(
            self.row_width,
            self.buffer.len(),
            pager::page_count(self.buffer.len(), self.row_width),
            self.cursor,
            self.mode.name(),
        );
        let status_widget =
            Paragraph::new(status).style(Style::default().bg(Colors::STATUS_BG).fg(Colors::STATUS_FG));
        frame.render_widget(status_widget, layout[0]);

        let view = EditorView::new(self.buffer.data())
            .cursor(self.cursor)
            .scroll(self.scroll);
        frame.render_widget(view, layout[2]);
    }
}
