pub mod app_config;
pub mod memory_repo;
pub mod seed;

pub use memory_repo::MemoryStore;
pub use seed::SeedData;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read seed file {path}: {source}")]
    SeedIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Seed file {path} breaks account invariants: {reason}")]
    SeedInvalid { path: String, reason: String },
    #[error("Invalid seed file {path}: {source}")]
    SeedFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
