//! Template store adapters.

mod directory;
mod memory;

pub use directory::DirectoryTemplateStore;
pub use memory::InMemoryStore;
