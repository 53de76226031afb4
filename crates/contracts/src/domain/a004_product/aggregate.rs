use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::listing::{
    Draft, EntityKind, FieldSpec, FieldValue, KindMessages, Requirement, Searchable, Sortable,
    ValueRule,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Категория по наименованию из справочника категорий
    pub category: String,
    /// Поставщик по наименованию, может быть не указан
    #[serde(default)]
    pub supplier: String,
    pub price: f64,
    pub stock: u32,
}

impl Product {
    pub fn new(
        name: String,
        description: String,
        category: String,
        supplier: String,
        price: f64,
        stock: u32,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ProductId::new_v4()),
            name,
            description,
            category,
            supplier,
            price,
            stock,
        }
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn is_active(&self) -> bool {
        self.base.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.base.is_active = active;
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Товар"
    }

    fn list_name() -> &'static str {
        "Товары"
    }
}

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.description.to_lowercase().contains(filter)
            || self.category.to_lowercase().contains(filter)
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.cmp(&other.name),
            "category" => self.category.cmp(&other.category),
            "price" => self
                .price
                .partial_cmp(&other.price)
                .unwrap_or(Ordering::Equal),
            "stock" => self.stock.cmp(&other.stock),
            "created_at" => self
                .base
                .metadata
                .created_at
                .cmp(&other.base.metadata.created_at),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// Конфигурация списка
// ============================================================================
static PRODUCT_FIELDS: [FieldSpec; 6] = [
    FieldSpec::new("name", "Наименование", Requirement::Always, ValueRule::Any),
    FieldSpec::new(
        "description",
        "Описание",
        Requirement::Optional,
        ValueRule::Any,
    ),
    FieldSpec::new("category", "Категория", Requirement::Always, ValueRule::Any),
    FieldSpec::new(
        "supplier",
        "Поставщик",
        Requirement::Optional,
        ValueRule::Any,
    ),
    FieldSpec::new(
        "price",
        "Цена",
        Requirement::Always,
        ValueRule::NonNegativeNumber,
    ),
    FieldSpec::new(
        "stock",
        "Остаток",
        Requirement::Always,
        ValueRule::NonNegativeInt,
    ),
];

static PRODUCT_MESSAGES: KindMessages = KindMessages {
    created: "Товар создан",
    updated: "Товар обновлён",
    deleted: "Товар удалён",
    activated: "Товар активирован",
    deactivated: "Товар деактивирован",
};

impl EntityKind for Product {
    fn field_specs() -> &'static [FieldSpec] {
        &PRODUCT_FIELDS
    }

    fn messages() -> &'static KindMessages {
        &PRODUCT_MESSAGES
    }

    fn to_draft(&self) -> Draft {
        let mut draft = Draft::new();
        draft.set("name", FieldValue::text(self.name.clone()));
        draft.set("description", FieldValue::text(self.description.clone()));
        draft.set("category", FieldValue::text(self.category.clone()));
        draft.set("supplier", FieldValue::text(self.supplier.clone()));
        // Display у f64 сам отбрасывает дробный ноль: 90.0 -> "90"
        draft.set("price", FieldValue::text(self.price.to_string()));
        draft.set("stock", FieldValue::text(self.stock.to_string()));
        draft
    }

    fn new_for_insert(draft: &Draft) -> Self {
        Self::new(
            draft.trimmed("name").to_string(),
            draft.trimmed("description").to_string(),
            draft.trimmed("category").to_string(),
            draft.trimmed("supplier").to_string(),
            draft.trimmed("price").parse().unwrap_or(0.0),
            draft.trimmed("stock").parse().unwrap_or(0),
        )
    }

    fn apply_draft(&mut self, draft: &Draft) {
        self.name = draft.trimmed("name").to_string();
        self.description = draft.trimmed("description").to_string();
        self.category = draft.trimmed("category").to_string();
        self.supplier = draft.trimmed("supplier").to_string();
        self.price = draft.trimmed("price").parse().unwrap_or(0.0);
        self.stock = draft.trimmed("stock").parse().unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new(
            "Молоко 3,2%".to_string(),
            "Пастеризованное".to_string(),
            "Молочные продукты".to_string(),
            "ООО Луговое".to_string(),
            89.90,
            120,
        )
    }

    #[test]
    fn draft_round_trip_keeps_numeric_fields() {
        let source = product();
        let draft = source.to_draft();
        assert_eq!(draft.text("price"), "89.9");
        assert_eq!(draft.text("stock"), "120");

        let rebuilt = Product::new_for_insert(&draft);
        assert_eq!(rebuilt.price, 89.9);
        assert_eq!(rebuilt.stock, 120);
        assert_eq!(rebuilt.name, source.name);
    }

    #[test]
    fn whole_price_renders_without_fraction() {
        let mut item = product();
        item.price = 90.0;
        assert_eq!(item.to_draft().text("price"), "90");
    }

    #[test]
    fn apply_draft_overwrites_fields_but_not_id() {
        let mut item = product();
        let id = item.id();
        let mut draft = item.to_draft();
        draft.set("price", FieldValue::text("104.5"));
        draft.set("stock", FieldValue::text("0"));

        item.apply_draft(&draft);
        assert_eq!(item.price, 104.5);
        assert_eq!(item.stock, 0);
        assert_eq!(item.id(), id);
    }
}
