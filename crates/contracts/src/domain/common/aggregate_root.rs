use super::{EntityMetadata, Validate};

/// Трейт для корня агрегата
///
/// Связывает запись с её формой (DTO) и описывает статические метаданные,
/// по которым строятся пути API, имена таблиц и заголовки UI.
pub trait AggregateRoot {
    /// Форма создания/редактирования записи
    type Dto: Validate + Clone + Default;

    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> i32;

    /// Получить метаданные жизненного цикла
    fn metadata(&self) -> &EntityMetadata;

    /// Заполнить форму редактирования из записи
    fn to_dto(&self) -> Self::Dto;

    // ============================================================================
    // Метаданные класса агрегата
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции в REST API (например, "boat-types")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Имя таблицы БД (например, "a001_boat_types")
    fn table_name() -> String {
        format!(
            "{}_{}",
            Self::aggregate_index(),
            Self::collection_name().replace('-', "_")
        )
    }

    /// Путь коллекции в API (например, "/api/boat-types")
    fn api_path() -> String {
        format!("/api/{}", Self::collection_name())
    }
}
