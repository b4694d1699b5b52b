pub(crate) mod error;
pub(crate) mod home;
pub(crate) mod orders;
