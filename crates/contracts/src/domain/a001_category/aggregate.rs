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
pub struct CategoryId(pub Uuid);

impl CategoryId {
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

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub base: BaseAggregate<CategoryId>,

    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl Category {
    pub fn new(name: String, description: String, image_url: Option<String>) -> Self {
        Self {
            base: BaseAggregate::new(CategoryId::new_v4()),
            name,
            description,
            image_url,
        }
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Категория"
    }

    fn list_name() -> &'static str {
        "Категории"
    }
}

impl Searchable for Category {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.description.to_lowercase().contains(filter)
    }
}

impl Sortable for Category {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.cmp(&other.name),
            "description" => self.description.cmp(&other.description),
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
static CATEGORY_FIELDS: [FieldSpec; 3] = [
    FieldSpec::new("name", "Наименование", Requirement::Always, ValueRule::Any),
    FieldSpec::new(
        "description",
        "Описание",
        Requirement::Always,
        ValueRule::Any,
    ),
    FieldSpec::new(
        "image_url",
        "Изображение (URL)",
        Requirement::Optional,
        ValueRule::Any,
    ),
];

static CATEGORY_MESSAGES: KindMessages = KindMessages {
    created: "Категория создана",
    updated: "Категория обновлена",
    deleted: "Категория удалена",
    activated: "Категория активирована",
    deactivated: "Категория деактивирована",
};

impl EntityKind for Category {
    fn field_specs() -> &'static [FieldSpec] {
        &CATEGORY_FIELDS
    }

    fn messages() -> &'static KindMessages {
        &CATEGORY_MESSAGES
    }

    fn to_draft(&self) -> Draft {
        let mut draft = Draft::new();
        draft.set("name", FieldValue::text(self.name.clone()));
        draft.set("description", FieldValue::text(self.description.clone()));
        draft.set(
            "image_url",
            FieldValue::text(self.image_url.clone().unwrap_or_default()),
        );
        draft
    }

    fn new_for_insert(draft: &Draft) -> Self {
        Self::new(
            draft.trimmed("name").to_string(),
            draft.trimmed("description").to_string(),
            optional_text(draft, "image_url"),
        )
    }

    fn apply_draft(&mut self, draft: &Draft) {
        self.name = draft.trimmed("name").to_string();
        self.description = draft.trimmed("description").to_string();
        self.image_url = optional_text(draft, "image_url");
    }
}

fn optional_text(draft: &Draft, field: &str) -> Option<String> {
    let value = draft.trimmed(field);
    (!value.is_empty()).then(|| value.to_string())
}
