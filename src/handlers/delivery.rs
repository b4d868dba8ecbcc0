//! Delivery of directives to Telegram
//!
//! Sends are fire-and-forget from the engine's point of view: a failed send is
//! logged and the remaining directives are still attempted.

use teloxide::{
    Bot,
    prelude::*,
    types::{ChatId, InputFile, InputMedia, InputMediaPhoto, KeyboardButton, KeyboardMarkup},
};
use tracing::debug;
use crate::models::{Directive, Keyboard, MediaRef};
use crate::utils::helpers::truncate_text;
use crate::utils::logging::log_delivery_failure;

/// Telegram limit for message text
const MAX_TEXT_CHARS: usize = 4096;
/// Telegram limit for media captions
const MAX_CAPTION_CHARS: usize = 1024;

/// Build the reply keyboard for a keyboard descriptor
pub fn reply_keyboard(keyboard: Keyboard) -> KeyboardMarkup {
    let rows = keyboard
        .rows()
        .into_iter()
        .map(|row| row.into_iter().map(KeyboardButton::new).collect::<Vec<_>>());

    KeyboardMarkup::new(rows).resize_keyboard()
}

/// Send directives to a chat in order
pub async fn deliver(bot: &Bot, chat_id: ChatId, directives: Vec<Directive>) {
    for directive in directives {
        match directive {
            Directive::Text { body, keyboard } => send_text(bot, chat_id, &body, keyboard).await,
            Directive::Media { caption, media } => send_media(bot, chat_id, &caption, &media).await,
        }
    }
}

async fn send_text(bot: &Bot, chat_id: ChatId, body: &str, keyboard: Option<Keyboard>) {
    let mut request = bot.send_message(chat_id, truncate_text(body, MAX_TEXT_CHARS));
    if let Some(keyboard) = keyboard {
        request = request.reply_markup(reply_keyboard(keyboard));
    }

    match request.await {
        Ok(_) => debug!(chat_id = chat_id.0, keyboard = ?keyboard, "Text message sent"),
        Err(e) => log_delivery_failure(chat_id.0, "text", &e),
    }
}

fn input_file(media: &MediaRef) -> InputFile {
    InputFile::file_id(media.as_str())
}

/// Photo album with the caption on the first photo
fn album(caption: String, media: &[MediaRef]) -> Vec<InputMedia> {
    let mut caption = Some(caption);
    media
        .iter()
        .map(|m| {
            let mut photo = InputMediaPhoto::new(input_file(m));
            if let Some(caption) = caption.take() {
                photo = photo.caption(caption);
            }
            InputMedia::Photo(photo)
        })
        .collect()
}

async fn send_media(bot: &Bot, chat_id: ChatId, caption: &str, media: &[MediaRef]) {
    let caption = truncate_text(caption, MAX_CAPTION_CHARS);

    let result = match media {
        [] => bot.send_message(chat_id, caption).await.map(|_| ()),
        // Albums need at least two items
        [single] => bot.send_photo(chat_id, input_file(single)).caption(caption).await.map(|_| ()),
        _ => bot.send_media_group(chat_id, album(caption, media)).await.map(|_| ()),
    };

    match result {
        Ok(()) => debug!(chat_id = chat_id.0, photos = media.len(), "Media message sent"),
        Err(e) => log_delivery_failure(chat_id.0, "media", &e),
    }
}
