mod state;

pub use state::App;

use crossterm::event::KeyCode;

/// 編集モード
///
/// HEXは16進2桁で1バイト、TEXTは文字コードをそのまま1バイトとして書く。
/// 切り替えは入力文字の解釈だけを変え、移動キーには影響しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Hex,
    Text,
}

impl Mode {
    /// ステータス行に出す表示名
    pub fn name(self) -> &'static str {
        match self {
            Mode::Hex => "hex",
            Mode::Text => "text",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Mode::Hex => Mode::Text,
            Mode::Text => Mode::Hex,
        }
    }
}

/// 入力状態（HEX入力は2桁で1バイト）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    #[default]
    Normal,
    /// HEX入力の1桁目（上位ニブル）を入力済み
    PendingNibble(u8),
}

/// アプリケーションアクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SaveAndQuit,

    // カーソル移動
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,

    // スクロール
    ScrollUp,
    ScrollDown,

    // 編集
    InputHex(char),
    InputText(char),
    Delete,
    ToggleMode, // HEX <-> TEXT

    None,
}

impl Action {
    /// キーコードからアクションに変換（現在のモードで解釈が変わる）
    pub fn from_key(key: KeyCode, mode: Mode) -> Self {
        match (key, mode) {
            // 矢印キー
            (KeyCode::Up, _) => Action::CursorUp,
            (KeyCode::Down, _) => Action::CursorDown,
            (KeyCode::Left, _) => Action::CursorLeft,
            (KeyCode::Right, _) => Action::CursorRight,

            // ページ送り
            (KeyCode::PageUp, _) => Action::ScrollUp,
            (KeyCode::PageDown, _) => Action::ScrollDown,

            // モード切替
            (KeyCode::Tab, _) => Action::ToggleMode,

            // 削除
            (KeyCode::Backspace | KeyCode::Delete, _) => Action::Delete,

            // 終了と保存はHEXモードのみ（TEXTモードでは同じキーが入力文字になる）
            (KeyCode::Char('q'), Mode::Hex) => Action::Quit,
            (KeyCode::Char('s') | KeyCode::Enter, Mode::Hex) => Action::SaveAndQuit,

            // 文字入力
            (KeyCode::Char(c), Mode::Hex) if c.is_ascii_hexdigit() => Action::InputHex(c),
            (KeyCode::Char(c), Mode::Text) => Action::InputText(c),

            _ => Action::None,
        }
    }
}
