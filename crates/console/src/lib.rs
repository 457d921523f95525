//! Ядро административной консоли: вывод отображаемых коллекций из сырых
//! данных и состояния фильтров, плюс резолвер выбора образца для TNA.
//!
//! Слой не содержит сетевого и презентационного кода: репозитории —
//! абстрактные асинхронные коллабораторы, вывод — чистые функции.

pub mod domain;
pub mod shared;
