pub mod error;
pub mod feedback;
pub mod form;
pub mod transport;
pub mod validation;
pub mod workflow;

pub use form::ContactForm;
