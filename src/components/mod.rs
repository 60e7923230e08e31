pub mod booking_form;
pub mod factory_card;
pub mod filter_section;
pub mod footer;
pub mod image_slider;
pub mod navbar;
pub mod rating_dialog;
pub mod share_buttons;
pub mod static_page;
pub mod workdays_dialog;
