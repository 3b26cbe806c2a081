pub mod memory;

pub use memory::InMemoryRefreshTokenRegistry;
