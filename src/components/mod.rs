pub mod bottom_nav;
pub mod message_box;
pub mod status;
