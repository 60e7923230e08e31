pub mod contact_us;
pub mod factory_detail;
pub mod home;
pub mod listing;
pub mod static_pages;
