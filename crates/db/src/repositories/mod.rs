pub mod alumni_repo;
pub mod event_registration_repo;
pub mod event_repo;
pub mod mentor_repo;
pub mod mentorship_assignment_repo;
pub mod student_repo;

pub use alumni_repo::AlumniRepo;
pub use event_registration_repo::EventRegistrationRepo;
pub use event_repo::EventRepo;
pub use mentor_repo::MentorRepo;
pub use mentorship_assignment_repo::MentorshipAssignmentRepo;
pub use student_repo::StudentRepo;
