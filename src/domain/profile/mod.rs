//! Shareable Profile - the exportable result of a completed quiz.

mod profile_assembler;
mod profile_size;
mod shareable_profile;

pub use profile_assembler::ProfileAssembler;
pub use profile_size::ProfileSize;
pub use shareable_profile::{CardValue, ShareCard, ShareableProfile, APP_URL};
