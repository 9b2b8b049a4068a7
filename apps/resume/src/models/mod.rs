pub mod profile;
pub mod view;

pub use profile::{sort_by_recency, Education, Entry, EntryKind, Profile, SkillGroup, YearMonth};
pub use view::{EducationRecord, HeaderRecord, JobRecord, ProjectRecord, ResumeView, SkillRecord};
