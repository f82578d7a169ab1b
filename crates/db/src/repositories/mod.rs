//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

mod support;

pub mod category_repo;
pub mod course_repo;
pub mod enrollment_repo;
pub mod event_repo;
pub mod product_detail_repo;
pub mod product_repo;
pub mod professor_repo;
pub mod profile_repo;
pub mod student_repo;
pub mod tag_repo;
pub mod volunteer_repo;

pub use category_repo::CategoryRepo;
pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use event_repo::EventRepo;
pub use product_detail_repo::ProductDetailRepo;
pub use product_repo::ProductRepo;
pub use professor_repo::ProfessorRepo;
pub use profile_repo::ProfileRepo;
pub use student_repo::StudentRepo;
pub use tag_repo::TagRepo;
pub use volunteer_repo::VolunteerRepo;
