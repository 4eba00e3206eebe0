//! Form validation module: field validators, input sanitizers, and the
//! stateful form-validation session consumed by the page layer.

mod form;
pub mod sanitizers;
pub mod validators;

pub use form::{FieldState, FormValidation, RuleSet};
pub use validators::{rule, Validator};
