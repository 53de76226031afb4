//! Демо-данные справочников, вшитые в бинарник.
//!
//! Страницы загружают коллекции один раз при монтировании и дальше
//! работают только с памятью; кнопка обновления перечитывает эти же
//! наборы заново.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::domain::a001_category::Category;
use crate::domain::a002_client::Client;
use crate::domain::a003_return::Return;
use crate::domain::a004_product::Product;
use crate::domain::a005_supplier::Supplier;
use crate::domain::a006_role::Role;
use crate::domain::a007_user::User;
use crate::domain::common::{AggregateRoot, EntityMetadata};

const CATEGORIES: &str = include_str!("data/categories.json");
const CLIENTS: &str = include_str!("data/clients.json");
const RETURNS: &str = include_str!("data/returns.json");
const PRODUCTS: &str = include_str!("data/products.json");
const SUPPLIERS: &str = include_str!("data/suppliers.json");
const ROLES: &str = include_str!("data/roles.json");
const USERS: &str = include_str!("data/users.json");

/// Перенести общие поля записи на собранный агрегат
fn seed<T: AggregateRoot>(mut item: T, active: bool, created_at: DateTime<Utc>) -> T {
    item.set_active(active);
    *item.metadata_mut() = EntityMetadata::seeded(created_at);
    item
}

// ----------------------------------------------------------------------------
// Категории
// ----------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
struct CategoryRecord {
    name: String,
    description: String,
    image_url: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
}

pub fn categories() -> Vec<Category> {
    let records: Vec<CategoryRecord> =
        serde_json::from_str(CATEGORIES).expect("embedded categories.json is valid");
    records
        .into_iter()
        .map(|r| {
            seed(
                Category::new(r.name, r.description, r.image_url),
                r.active,
                r.created_at,
            )
        })
        .collect()
}

// ----------------------------------------------------------------------------
// Клиенты
// ----------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
struct ClientRecord {
    full_name: String,
    email: String,
    phone: String,
    tax_number: String,
    region: String,
    city: String,
    address: String,
    active: bool,
    created_at: DateTime<Utc>,
}

pub fn clients() -> Vec<Client> {
    let records: Vec<ClientRecord> =
        serde_json::from_str(CLIENTS).expect("embedded clients.json is valid");
    records
        .into_iter()
        .map(|r| {
            seed(
                Client::new(
                    r.full_name,
                    r.email,
                    r.phone,
                    r.tax_number,
                    r.region,
                    r.city,
                    r.address,
                ),
                r.active,
                r.created_at,
            )
        })
        .collect()
}

// ----------------------------------------------------------------------------
// Возвраты
// ----------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
struct ReturnRecord {
    client: String,
    product: String,
    quantity: u32,
    reason: String,
    date: NaiveDate,
    active: bool,
    created_at: DateTime<Utc>,
}

pub fn returns() -> Vec<Return> {
    let records: Vec<ReturnRecord> =
        serde_json::from_str(RETURNS).expect("embedded returns.json is valid");
    records
        .into_iter()
        .map(|r| {
            seed(
                Return::new(r.client, r.product, r.quantity, r.reason, r.date),
                r.active,
                r.created_at,
            )
        })
        .collect()
}

// ----------------------------------------------------------------------------
// Товары
// ----------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
struct ProductRecord {
    name: String,
    description: String,
    category: String,
    supplier: String,
    price: f64,
    stock: u32,
    active: bool,
    created_at: DateTime<Utc>,
}

pub fn products() -> Vec<Product> {
    let records: Vec<ProductRecord> =
        serde_json::from_str(PRODUCTS).expect("embedded products.json is valid");
    records
        .into_iter()
        .map(|r| {
            seed(
                Product::new(
                    r.name,
                    r.description,
                    r.category,
                    r.supplier,
                    r.price,
                    r.stock,
                ),
                r.active,
                r.created_at,
            )
        })
        .collect()
}

// ----------------------------------------------------------------------------
// Поставщики
// ----------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
struct SupplierRecord {
    company: String,
    contact_name: String,
    email: String,
    phone: String,
    city: String,
    tax_number: String,
    active: bool,
    created_at: DateTime<Utc>,
}

pub fn suppliers() -> Vec<Supplier> {
    let records: Vec<SupplierRecord> =
        serde_json::from_str(SUPPLIERS).expect("embedded suppliers.json is valid");
    records
        .into_iter()
        .map(|r| {
            seed(
                Supplier::new(
                    r.company,
                    r.contact_name,
                    r.email,
                    r.phone,
                    r.city,
                    r.tax_number,
                ),
                r.active,
                r.created_at,
            )
        })
        .collect()
}

// ----------------------------------------------------------------------------
// Роли
// ----------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
struct RoleRecord {
    name: String,
    description: String,
    permissions: Vec<String>,
    active: bool,
    created_at: DateTime<Utc>,
}

pub fn roles() -> Vec<Role> {
    let records: Vec<RoleRecord> =
        serde_json::from_str(ROLES).expect("embedded roles.json is valid");
    records
        .into_iter()
        .map(|r| {
            seed(
                Role::new(r.name, r.description, r.permissions),
                r.active,
                r.created_at,
            )
        })
        .collect()
}

// ----------------------------------------------------------------------------
// Пользователи
// ----------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
struct UserRecord {
    full_name: String,
    email: String,
    password: String,
    role: String,
    active: bool,
    created_at: DateTime<Utc>,
}

pub fn users() -> Vec<User> {
    let records: Vec<UserRecord> =
        serde_json::from_str(USERS).expect("embedded users.json is valid");
    records
        .into_iter()
        .map(|r| {
            seed(
                User::new(r.full_name, r.email, r.password, r.role),
                r.active,
                r.created_at,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_role::ADMIN_ROLE_NAME;
    use crate::domain::a007_user::ADMIN_EMAIL;
    use crate::domain::common::AggregateId;
    use crate::listing::EntityKind;
    use std::collections::BTreeSet;

    fn assert_seed_shape<T: EntityKind>(items: &[T]) {
        assert!(!items.is_empty());
        assert!(items.iter().any(|i| i.is_active()));
        assert!(items.iter().any(|i| !i.is_active()));

        let ids: BTreeSet<String> = items.iter().map(|i| i.id().as_string()).collect();
        assert_eq!(ids.len(), items.len(), "идентификаторы должны быть уникальны");
    }

    #[test]
    fn every_collection_is_seeded_with_unique_ids_and_mixed_statuses() {
        assert_seed_shape(&categories());
        assert_seed_shape(&clients());
        assert_seed_shape(&returns());
        assert_seed_shape(&products());
        assert_seed_shape(&suppliers());
        assert_seed_shape(&roles());
        assert_seed_shape(&users());
    }

    #[test]
    fn categories_fill_more_than_one_page_of_seven() {
        assert_eq!(categories().len(), 10);
    }

    #[test]
    fn admin_role_and_account_are_present_and_protected() {
        let admin_role = roles()
            .into_iter()
            .find(|r| r.name == ADMIN_ROLE_NAME)
            .expect("в демо-данных есть встроенная роль");
        assert!(admin_role.is_protected());
        assert!(admin_role.is_active());

        let admin_user = users()
            .into_iter()
            .find(|u| u.email == ADMIN_EMAIL)
            .expect("в демо-данных есть администратор");
        assert!(admin_user.is_protected());
        assert!(admin_user.is_active());
    }

    #[test]
    fn product_categories_exist_in_category_collection() {
        let names: BTreeSet<String> = categories().into_iter().map(|c| c.name).collect();
        for product in products() {
            assert!(
                names.contains(&product.category),
                "товар «{}» ссылается на неизвестную категорию «{}»",
                product.name,
                product.category
            );
        }
    }

    #[test]
    fn returns_reference_existing_clients_and_products() {
        let client_names: BTreeSet<String> = clients().into_iter().map(|c| c.full_name).collect();
        let product_names: BTreeSet<String> = products().into_iter().map(|p| p.name).collect();
        for item in returns() {
            assert!(client_names.contains(&item.client));
            assert!(product_names.contains(&item.product));
        }
    }

    #[test]
    fn users_reference_existing_roles() {
        let role_names: BTreeSet<String> = roles().into_iter().map(|r| r.name).collect();
        for user in users() {
            assert!(role_names.contains(&user.role));
        }
    }

    #[test]
    fn seeded_timestamps_come_from_records() {
        let first = &categories()[0];
        assert_eq!(first.metadata().created_at.timezone(), chrono::Utc);
        assert_eq!(first.metadata().created_at.format("%Y").to_string(), "2025");
        assert_eq!(first.metadata().version, 0);
    }
}
