//! Form submission adapters.
//!
//! - `GoogleFormsSubmitter` - Form-encoded POST to a Google Form
//! - `MockFormSubmitter` - In-memory recorder for tests

mod google_forms;
mod mock;

pub use google_forms::{FormFields, GoogleFormsSubmitter};
pub use mock::MockFormSubmitter;
