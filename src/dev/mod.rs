//! Development-mode helpers: a mock data provider backed by fixtures.

pub mod mock_client;

pub use mock_client::MockClient;
