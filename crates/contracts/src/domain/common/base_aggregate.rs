use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Базовый агрегат с обязательными полями для всех агрегатов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Уникальный идентификатор записи
    pub id: Id,
    /// Признак активности: только неактивную запись можно удалить
    pub is_active: bool,
    /// Метаданные жизненного цикла
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    /// Создать новый агрегат (новые записи активны)
    pub fn new(id: Id) -> Self {
        Self {
            id,
            is_active: true,
            metadata: EntityMetadata::new(),
        }
    }

    /// Создать агрегат с существующими метаданными (для демо-данных)
    pub fn with_metadata(id: Id, is_active: bool, metadata: EntityMetadata) -> Self {
        Self {
            id,
            is_active,
            metadata,
        }
    }

    /// Обновить timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
