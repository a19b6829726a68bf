pub mod domain;
pub mod error;
pub mod extract;
pub mod pipeline;

pub use domain::*;
pub use error::CoreError;
pub use extract::extract_contact;
pub use pipeline::{organize, render_csv, Organized, OrganizeSummary, OUTPUT_HEADER};
