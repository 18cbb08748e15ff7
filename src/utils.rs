pub mod memory;

pub use memory::resident_memory_mb;
