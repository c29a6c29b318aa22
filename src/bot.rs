use crate::config::Config;
use crate::handlers;
use anyhow::Result;
use std::future::Future;
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Поддерживаемые команды:")]
pub enum Command {
    /// Payload из deep link (`/start <payload>`) игнорируется
    #[command(description = "открыть 3D-просмотрщик панорам.")]
    Start(String),
}

pub fn schema() -> UpdateHandler<teloxide::RequestError> {
    Update::filter_message()
        .filter_command::<Command>()
        .endpoint(answer)
}

async fn answer(bot: Bot, msg: Message, cmd: Command, config: Arc<Config>) -> ResponseResult<()> {
    match cmd {
        Command::Start(_) => handlers::handle_start(bot, msg, config).await,
    }
}

pub async fn start_bot(bot: Bot, config: Config) -> Result<()> {
    info!("Bot is starting...");

    // Пропускаем накопившиеся апдейты
    let listener = Polling::builder(bot.clone())
        .drop_pending_updates()
        .build();

    let mut dispatcher = Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![Arc::new(config)])
        .enable_ctrlc_handler()
        .build();

    // Ctrl-C обрабатывает сам teloxide, SIGTERM (docker stop, systemd) ловим здесь
    let terminate = terminate_signal()?;
    let token = dispatcher.shutdown_token();
    tokio::spawn(shutdown_on(terminate, move || async move {
        info!("SIGTERM received, trying to shutdown the dispatcher...");
        match token.shutdown() {
            Ok(done) => done.await,
            Err(e) => warn!("Dispatcher is not running: {}", e),
        }
    }));

    dispatcher
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    info!("Bot stopped");
    Ok(())
}

/// Runs `shutdown` once `signal` resolves.
async fn shutdown_on<S, F, Fut>(signal: S, shutdown: F)
where
    S: Future<Output = ()>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    signal.await;
    shutdown().await;
}

#[cfg(unix)]
fn terminate_signal() -> std::io::Result<impl Future<Output = ()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    Ok(async move {
        sigterm.recv().await;
    })
}

#[cfg(not(unix))]
fn terminate_signal() -> std::io::Result<impl Future<Output = ()>> {
    Ok(std::future::pending())
}
