pub mod add_image;
pub mod delete_image;
pub mod get_images;
pub mod set_primary;
