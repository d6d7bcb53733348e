pub mod in_memory_result_repository;

pub use in_memory_result_repository::InMemoryResultRepository;
