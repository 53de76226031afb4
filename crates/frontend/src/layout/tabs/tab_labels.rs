//! Tab labels - единственный источник правды для заголовков табов.
//!
//! Заголовки берутся из статических имён агрегатов в contracts,
//! ключи совпадают с `AggregateRoot::full_name()`.

use contracts::domain::a001_category::Category;
use contracts::domain::a002_client::Client;
use contracts::domain::a003_return::Return;
use contracts::domain::a004_product::Product;
use contracts::domain::a005_supplier::Supplier;
use contracts::domain::a006_role::Role;
use contracts::domain::a007_user::User;
use contracts::domain::common::AggregateRoot;

/// Возвращает читаемый заголовок таба для данного ключа.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_category" => Category::list_name(),
        "a002_client" => Client::list_name(),
        "a003_return" => Return::list_name(),
        "a004_product" => Product::list_name(),
        "a005_supplier" => Supplier::list_name(),
        "a006_role" => Role::list_name(),
        "a007_user" => User::list_name(),
        _ => "Неизвестный раздел",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve_to_list_names() {
        assert_eq!(tab_label_for_key("a001_category"), Category::list_name());
        assert_eq!(tab_label_for_key("a007_user"), User::list_name());
    }

    #[test]
    fn unknown_key_gets_fallback_label() {
        assert_eq!(tab_label_for_key("a999_ghost"), "Неизвестный раздел");
    }
}
