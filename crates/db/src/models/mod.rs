pub mod alumni;
pub mod event;
pub mod event_registration;
pub mod mentor;
pub mod mentorship_assignment;
pub mod student;
