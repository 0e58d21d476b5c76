pub mod classification;
pub mod student;
pub mod subject;

pub use classification::Classification;
pub use student::{StudentKey, StudentMap, SubjectRecord};
pub use subject::{SubjectCode, SubjectGroup, Year};
