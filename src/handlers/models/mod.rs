pub mod images;
pub mod music;

pub use images::{create as create_image, delete as delete_image, get as get_image};
pub use music::{create as create_music, delete as delete_music, get as get_music};
