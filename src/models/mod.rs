#[macro_use]
mod labeled_enum;

pub use automation::*;
pub use banner::*;
pub use candidate::*;
pub use candidate_status::*;
pub use company::*;
pub use contact_submission::*;
pub use core_value::*;
pub use email_config::*;
pub use facility::*;
pub use jlpt_level::*;
pub use job::*;
pub use job_category::*;
pub use layout::*;
pub use machinery::*;
pub use major::*;
pub use marital_status::*;
pub use milestone::*;
pub use product::*;
pub use recruitment_status::*;
pub use submission_status::*;

mod automation;
mod banner;
mod candidate;
mod candidate_status;
mod company;
mod contact_submission;
mod core_value;
mod email_config;
mod facility;
mod jlpt_level;
mod job;
mod job_category;
mod layout;
mod machinery;
mod major;
mod marital_status;
mod milestone;
mod product;
mod recruitment_status;
mod submission_status;

