mod manager;
mod store;

pub use manager::PlannerStateManager;
pub use store::{keys, JsonFileStore, MemoryStore, StateStore};
