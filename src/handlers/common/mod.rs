pub mod babies;
pub mod users;

pub use babies::{create as create_baby, delete as delete_baby, get as get_babies, update as update_baby};
pub use users::{create as create_user, delete as delete_user, get as get_user, update as update_user};
