pub mod home;
pub mod layout;
