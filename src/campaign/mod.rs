//! The send pipeline: validate, personalize, deliver, tally.

pub mod batch;
pub mod greeting;
pub mod report;
pub mod template;
pub mod validate;

pub use batch::Campaign;
pub use greeting::compose_greeting;
pub use report::{DeliveryOutcome, Report, ReportBody};
pub use template::{GREETING_PLACEHOLDER, Template};
pub use validate::is_valid_email;
