use crate::config::Config;
use crate::utils::{create_viewer_keyboard, WELCOME_TEXT};
use reqwest::Url;
use std::sync::Arc;
use teloxide::payloads::SendMessage;
use teloxide::prelude::*;
use teloxide::requests::JsonRequest;
use teloxide::types::Message;
use tracing::info;

/// Ответ на /start: приветствие и кнопка web app. Одинаков для всех чатов.
pub fn start_reply(bot: &Bot, chat_id: ChatId, web_app_url: &Url) -> JsonRequest<SendMessage> {
    bot.send_message(chat_id, WELCOME_TEXT)
        .reply_markup(create_viewer_keyboard(web_app_url))
}

pub async fn handle_start(bot: Bot, msg: Message, config: Arc<Config>) -> ResponseResult<()> {
    info!("Received /start from chat {}", msg.chat.id);

    start_reply(&bot, msg.chat.id, &config.web_app_url).await?;

    Ok(())
}
