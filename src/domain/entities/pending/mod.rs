pub mod pending_registration;

pub use pending_registration::PendingRegistration;
