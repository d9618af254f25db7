//! 表示モジュール

pub mod frame;

mod editor_view;

pub use editor_view::{EditorView, TEXT_PANE_WIDTH};

use ratatui::style::Color;

/// 配色
pub struct Colors;

impl Colors {
    /// 通常のセル
    pub const NORMAL: Color = Color::White;
    /// カーソル位置のセル
    pub const CURSOR: Color = Color::Red;
    /// ステータス行
    pub const STATUS_BG: Color = Color::DarkGray;
    pub const STATUS_FG: Color = Color::White;
}
