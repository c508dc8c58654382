pub mod error;
pub mod form;
pub mod formspree;
pub mod intake;
pub mod session;

pub use form::LeadField;
pub use formspree::FormspreeIntake;
pub use intake::submit;
pub use session::LeadSession;
