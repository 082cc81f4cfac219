//! Test doubles shared by unit tests, integration tests and the mock server

pub mod mock_repository;

pub use mock_repository::InMemoryUserRepository;
