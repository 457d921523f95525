//! Абстрактный CRUD-репозиторий сущности
//!
//! Сетевой слой остаётся снаружи ядра: консоль видит только эти трейты.
//! Повторов и backoff здесь нет — после успешной записи экран заново
//! запрашивает авторитетную коллекцию.

use async_trait::async_trait;
use contracts::domain::common::EntityRecord;
use thiserror::Error;

/// Ошибки внешнего репозитория
///
/// Отсутствие зависимой записи при резолюции выбора ошибкой не является —
/// это штатный переход в состояние New; `NotFound` возникает только при
/// прямом запросе по ключу.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("{entity} not found by key {key}")]
    NotFound { entity: &'static str, key: String },
}

/// CRUD-операции одной сущности
///
/// Обновление адресуется собственным идентификатором записи;
/// идентификатор присваивается бэкендом при создании.
#[async_trait]
pub trait EntityRepository<T: EntityRecord>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, RepositoryError>;

    async fn create(&self, dto: &T::Dto) -> Result<T, RepositoryError>;

    async fn update(&self, id: T::Id, dto: &T::Dto) -> Result<T, RepositoryError>;

    async fn delete(&self, id: T::Id) -> Result<(), RepositoryError>;
}
