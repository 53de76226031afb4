//! Страницы справочников

pub mod a001_category;
pub mod a002_client;
pub mod a003_return;
pub mod a004_product;
pub mod a005_supplier;
pub mod a006_role;
pub mod a007_user;
