// src/application/ports/mod.rs
pub mod identity;
pub mod storage;
pub mod time;
pub mod util;
pub mod workspace;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type IdentityProviderPort = dyn identity::IdentityProvider;
pub type ObjectStoragePort = dyn storage::ObjectStorage;
pub type WorkspaceDirectoryPort = dyn workspace::WorkspaceDirectory;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
