pub mod document;

pub use document::{
    CertificationItem, ContactInfo, EducationItem, OtherSocial, PersonalInfo, PersonalInfoPatch,
    ResumeDocument, WorkExperienceItem,
};
