//! hexe - Minimal terminal hex editor
//!
//! Loads one file, edits it in paired hex/text panes, writes it back on save.

use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use hexe::app::App;
use hexe::buffer::ByteBuffer;

/// Minimal terminal hex editor
#[derive(Parser, Debug)]
#[command(name = "hexe")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to edit
    #[arg(value_name = "FILE")]
    file: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 編集対象はターミナルに触る前に読み込む（空・読めないファイルはここで拒否）
    let buffer = match ByteBuffer::open(&args.file) {
        Ok(buffer) => buffer,
        Err(e) => {
            eprintln!("error: could not read file '{}': {}", args.file, e);
            std::process::exit(1);
        }
    };

    // ターミナルの初期化
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // アプリケーションの実行
    let result = run_app(&mut terminal, buffer);

    // ターミナルの後処理（エラー終了でもrawモードを残さない）
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, buffer: ByteBuffer) -> Result<()> {
    let mut app = App::new(buffer);

    // メインループ
    loop {
        terminal.draw(|f| app.draw(f))?;
        app.handle_event()?;

        if app.should_quit() {
            break;
        }
    }

    // 保存つき終了が要求されていた場合だけ書き戻す
    if app.save_on_exit() {
        app.save()?;
    }

    Ok(())
}
