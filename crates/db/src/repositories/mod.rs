//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-statement workflows
//! (schedule transitions, quiz score folding) run inside a single
//! transaction owned by the repository.

pub mod account_repo;
pub mod company_profile_repo;
pub mod person_profile_repo;
pub mod quiz_score_repo;
pub mod schedule_repo;
pub mod waste_image_repo;

pub use account_repo::AccountRepo;
pub use company_profile_repo::CompanyProfileRepo;
pub use person_profile_repo::PersonProfileRepo;
pub use quiz_score_repo::QuizScoreRepo;
pub use schedule_repo::ScheduleRepo;
pub use waste_image_repo::WasteImageRepo;
