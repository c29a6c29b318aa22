use reqwest::Url;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, WebAppInfo};

pub const WELCOME_TEXT: &str = "Добро пожаловать в 3D Панорамный Просмотрщик!\n\n\
Нажмите кнопку ниже, чтобы открыть приложение и начать загрузку панорам.";

pub const VIEWER_BUTTON_TEXT: &str = "📸 Открыть 3D-просмотрщик";

/// Клавиатура с единственной кнопкой, открывающей web app по `url`
pub fn create_viewer_keyboard(url: &Url) -> InlineKeyboardMarkup {
    let button = InlineKeyboardButton::web_app(
        VIEWER_BUTTON_TEXT,
        WebAppInfo { url: url.clone() },
    );

    InlineKeyboardMarkup::new(vec![vec![button]])
}
