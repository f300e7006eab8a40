pub mod student;

// Re-export the core types to provide a clean public API.
pub use student::Student;
