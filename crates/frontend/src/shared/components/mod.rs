pub mod confirm_dialog;
pub mod error_panel;
pub mod filter_panel;
pub mod image_upload;
pub mod pagination_controls;
pub mod star_rating;
pub mod stat_card;
pub mod status_badge;
pub mod table;
pub mod ui;
