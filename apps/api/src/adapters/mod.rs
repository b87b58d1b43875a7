//! Step data adapters.
//!
//! Each wizard step edits a local, form-shaped representation of its slice
//! of the document. Adapters convert both ways: `load` turns persisted
//! canonical data into editable drafts (seeding one blank row when the
//! slice is empty), `submit` re-encodes drafts to canonical form for the
//! reducer. Submission replaces the whole slice; there is no partial-row
//! patching.

pub mod career_summary;
pub mod certifications;
pub mod contact_info;
pub mod education;
pub mod personal_info;
pub mod uploads;
pub mod work_experience;
