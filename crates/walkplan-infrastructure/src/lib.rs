pub mod paths;
pub mod settings;
pub mod state_repository;
pub mod storage;

pub use crate::paths::WalkplanPaths;
pub use crate::settings::AppSettings;
pub use crate::state_repository::JsonStateRepository;
