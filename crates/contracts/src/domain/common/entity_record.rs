use super::RecordId;

/// Трейт для записи справочника/документа
///
/// Определяет обязательные методы и метаданные для всех сущностей системы.
pub trait EntityRecord {
    /// Тип идентификатора записи
    type Id: RecordId;

    /// DTO создания/обновления записи
    type Dto;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    // ============================================================================
    // Метаданные класса сущности (статические данные)
    // ============================================================================

    /// Индекс сущности в системе (например, "a001")
    fn entity_index() -> &'static str;

    /// Имя коллекции для REST API (например, "buyers")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя сущности для системы (например, "a001_buyers")
    fn full_name() -> String {
        format!("{}_{}", Self::entity_index(), Self::collection_name())
    }
}
