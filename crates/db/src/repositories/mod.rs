//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod activity_repo;
pub mod equipment_repo;
pub mod finalization_repo;
pub mod photo_repo;
pub mod result_repo;
pub mod session_repo;
pub mod task_repo;
pub mod user_repo;

pub use activity_repo::ActivityRepo;
pub use equipment_repo::EquipmentRepo;
pub use finalization_repo::FinalizationRepo;
pub use photo_repo::PhotoRepo;
pub use result_repo::ResultRepo;
pub use session_repo::SessionRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
