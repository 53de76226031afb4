use super::{AggregateId, EntityMetadata};

/// Трейт для корня агрегата
///
/// Определяет обязательные методы и метаданные для всех агрегатов системы
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Активна ли запись
    fn is_active(&self) -> bool;

    /// Установить признак активности
    fn set_active(&mut self, active: bool);

    /// Получить метаданные жизненного цикла
    fn metadata(&self) -> &EntityMetadata;

    /// Получить изменяемые метаданные
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Отображаемое имя записи (для заголовков и подтверждений)
    fn display_label(&self) -> String;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "category")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Категория")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Категории")
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата для системы (например, "a001_category")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
