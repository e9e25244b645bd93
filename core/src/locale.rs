//! User-facing strings.
//!
//! Russian is the default; English exists for hosts that want it. Every
//! string the view shows to a person goes through `Locale::text`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// Keys of the message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CreatedTitle,
    DeletedTitle,
    InvalidEmail,
    FillAllFields,
    LoadFailed,
    CreateFailed,
    DeleteFailed,
    EmptyList,
    Loading,
    Close,
}

impl Locale {
    pub fn text(self, message: Message) -> &'static str {
        match (self, message) {
            (Locale::Ru, Message::CreatedTitle) => "Пользователь успешно создан",
            (Locale::Ru, Message::DeletedTitle) => "Пользователь успешно удален",
            (Locale::Ru, Message::InvalidEmail) => "Некорректный формат email",
            (Locale::Ru, Message::FillAllFields) => "Пожалуйста, заполните все поля",
            (Locale::Ru, Message::LoadFailed) => "Не удалось загрузить список",
            (Locale::Ru, Message::EmptyList) => "Список пуст",
            (Locale::Ru, Message::Loading) => "Загрузка...",
            (Locale::Ru, Message::Close) => "Закрыть",
            // The write-failure alerts were never translated.
            (_, Message::CreateFailed) => "Failed to add user. Please try again.",
            (_, Message::DeleteFailed) => "Failed to delete user. Please try again.",
            (Locale::En, Message::CreatedTitle) => "User created successfully",
            (Locale::En, Message::DeletedTitle) => "User deleted successfully",
            (Locale::En, Message::InvalidEmail) => "Invalid email format",
            (Locale::En, Message::FillAllFields) => "Please fill in all fields",
            (Locale::En, Message::LoadFailed) => "Failed to load the list",
            (Locale::En, Message::EmptyList) => "The list is empty",
            (Locale::En, Message::Loading) => "Loading...",
            (Locale::En, Message::Close) => "Close",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale {0:?}, expected \"ru\" or \"en\"")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}
