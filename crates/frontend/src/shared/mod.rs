pub mod api_utils;
pub mod collection;
pub mod components;
pub mod date_utils;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod mutation;
pub mod page_frame;
pub mod toast;
