//! Контракты панели администрирования: доменные агрегаты,
//! универсальный контроллер списков и встроенные демо-данные.
//!
//! Крейт не зависит от UI и целиком проверяется обычными юнит-тестами
//! на хостовой платформе.

pub mod domain;
pub mod fixtures;
pub mod listing;
