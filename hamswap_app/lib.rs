pub mod bus;
pub mod command_handlers;
pub mod config;
pub mod cqrs;
pub mod discovery;
pub mod prefs;
pub mod queries_handlers;
pub mod repository;
pub mod reputation;
pub mod suggest;
pub mod uow;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
