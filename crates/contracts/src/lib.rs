//! Контракты предметной области: записи, DTO и общие трейты,
//! разделяемые ядром консоли и внешними слоями.

pub mod domain;
pub mod enums;
