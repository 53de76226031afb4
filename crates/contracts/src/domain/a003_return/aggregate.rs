use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::listing::{
    Draft, EntityKind, FieldSpec, FieldValue, KindMessages, Requirement, Searchable, Sortable,
    ValueRule,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReturnId(pub Uuid);

impl ReturnId {
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

impl AggregateId for ReturnId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ReturnId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Return {
    #[serde(flatten)]
    pub base: BaseAggregate<ReturnId>,

    /// Клиент по отображаемому имени из справочника клиентов
    pub client: String,
    /// Товар по наименованию из справочника товаров
    pub product: String,
    pub quantity: u32,
    pub reason: String,
    pub date: NaiveDate,
}

impl Return {
    pub fn new(
        client: String,
        product: String,
        quantity: u32,
        reason: String,
        date: NaiveDate,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ReturnId::new_v4()),
            client,
            product,
            quantity,
            reason,
            date,
        }
    }
}

impl AggregateRoot for Return {
    type Id = ReturnId;

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
        format!("{} / {}", self.client, self.product)
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "return"
    }

    fn element_name() -> &'static str {
        "Возврат"
    }

    fn list_name() -> &'static str {
        "Возвраты"
    }
}

impl Searchable for Return {
    fn matches_filter(&self, filter: &str) -> bool {
        self.client.to_lowercase().contains(filter)
            || self.product.to_lowercase().contains(filter)
            || self.reason.to_lowercase().contains(filter)
    }
}

impl Sortable for Return {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "client" => self.client.cmp(&other.client),
            "product" => self.product.cmp(&other.product),
            "quantity" => self.quantity.cmp(&other.quantity),
            "date" => self.date.cmp(&other.date),
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
static RETURN_FIELDS: [FieldSpec; 5] = [
    FieldSpec::new("client", "Клиент", Requirement::Always, ValueRule::Any),
    FieldSpec::new("product", "Товар", Requirement::Always, ValueRule::Any),
    FieldSpec::new(
        "quantity",
        "Количество",
        Requirement::Always,
        ValueRule::NonNegativeInt,
    ),
    FieldSpec::new("reason", "Причина", Requirement::Always, ValueRule::Any),
    FieldSpec::new("date", "Дата", Requirement::Always, ValueRule::Date),
];

static RETURN_MESSAGES: KindMessages = KindMessages {
    created: "Возврат создан",
    updated: "Возврат обновлён",
    deleted: "Возврат удалён",
    activated: "Возврат активирован",
    deactivated: "Возврат деактивирован",
};

impl EntityKind for Return {
    fn field_specs() -> &'static [FieldSpec] {
        &RETURN_FIELDS
    }

    fn messages() -> &'static KindMessages {
        &RETURN_MESSAGES
    }

    fn to_draft(&self) -> Draft {
        let mut draft = Draft::new();
        draft.set("client", FieldValue::text(self.client.clone()));
        draft.set("product", FieldValue::text(self.product.clone()));
        draft.set("quantity", FieldValue::text(self.quantity.to_string()));
        draft.set("reason", FieldValue::text(self.reason.clone()));
        draft.set(
            "date",
            FieldValue::text(self.date.format("%Y-%m-%d").to_string()),
        );
        draft
    }

    fn new_for_insert(draft: &Draft) -> Self {
        Self::new(
            draft.trimmed("client").to_string(),
            draft.trimmed("product").to_string(),
            parse_quantity(draft),
            draft.trimmed("reason").to_string(),
            parse_date(draft),
        )
    }

    fn apply_draft(&mut self, draft: &Draft) {
        self.client = draft.trimmed("client").to_string();
        self.product = draft.trimmed("product").to_string();
        self.quantity = parse_quantity(draft);
        self.reason = draft.trimmed("reason").to_string();
        self.date = parse_date(draft);
    }
}

// Черновик к этому моменту уже прошёл валидацию, запасные значения
// не должны встречаться в работе
fn parse_quantity(draft: &Draft) -> u32 {
    draft.trimmed("quantity").parse().unwrap_or(0)
}

fn parse_date(draft: &Draft) -> NaiveDate {
    NaiveDate::parse_from_str(draft.trimmed("date"), "%Y-%m-%d")
        .unwrap_or_else(|_| chrono::Utc::now().date_naive())
}
