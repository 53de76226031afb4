use serde::{Deserialize, Serialize};

/// Вид уведомления, определяет оформление тоста
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Destructive,
    Validation,
}

impl NoticeKind {
    /// CSS-модификатор для хоста уведомлений
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warning",
            NoticeKind::Destructive => "destructive",
            NoticeKind::Validation => "validation",
        }
    }
}

/// Уведомление, которое операция контроллера возвращает странице.
/// Контроллер сам ничего не рисует: страница передаёт уведомление тост-сервису.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Warning)
    }

    pub fn destructive(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Destructive)
    }
}
