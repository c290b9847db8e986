//! Database repositories
//!
//! Repositories encapsulate all SQL access, one per entity.

mod admin_repo;
mod representative_repo;
mod submission_repo;
mod task_repo;

pub use admin_repo::AdminRepository;
pub use representative_repo::RepresentativeRepository;
pub use submission_repo::SubmissionRepository;
pub use task_repo::TaskRepository;
