use std::sync::Arc;

use delizia_session::console::{self, ConsoleCommand, ConsoleError, HELP};
use delizia_session::{Config, SessionStore, StaticCatalog, init_logger_with_file, print_banner};
use shared::error::AppError;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    print_banner();
    tracing::info!(environment = %config.environment, "Delizia session console starting...");

    // 2. 加载菜品目录
    let catalog = match StaticCatalog::load(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            let app_error = AppError::from(e);
            tracing::error!(code = %app_error.code, error = %app_error, "Failed to load catalog");
            return Err(app_error.into());
        }
    };

    // 3. 创建会话
    let store = SessionStore::new(Arc::new(catalog), &config);
    let shutdown = CancellationToken::new();
    let listener = tokio::spawn(print_events(store.clone(), shutdown.clone()));

    println!("{}", console::render(&store.snapshot()));
    println!("Type 'help' for commands.");

    // 4. 命令循环
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                None
            }
        };
        let Some(line) = line else {
            break;
        };

        match console::parse_line(&line) {
            Ok(ConsoleCommand::Intent(intent)) => {
                if let Err(e) = store.dispatch(intent) {
                    let app_error = AppError::from(e);
                    println!("{} {}", app_error.code, app_error.message);
                }
            }
            Ok(ConsoleCommand::Show) => println!("{}", console::render(&store.snapshot())),
            Ok(ConsoleCommand::Help) => println!("{}", HELP),
            Ok(ConsoleCommand::Quit) => break,
            Err(ConsoleError::Empty) => {}
            Err(e) => println!("{}", e),
        }
    }

    // 5. 结束会话
    store.close();
    shutdown.cancel();
    if let Err(e) = listener.await {
        tracing::warn!(error = %e, "Event listener ended abnormally");
    }

    tracing::info!("Goodbye");
    Ok(())
}

/// Print session events until shutdown
async fn print_events(store: SessionStore, shutdown: CancellationToken) {
    let mut rx = store.subscribe();
    drop(store);

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            event = rx.recv() => match event {
                Ok(event) => println!("  · {}", console::render_event(&event)),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event listener lagged");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }
}
