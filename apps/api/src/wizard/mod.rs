//! Wizard state machine: the linear step sequence, the certifications
//! section override, and the reducer that owns every document mutation.

pub mod handlers;
pub mod navigation;
pub mod reducer;
