pub mod extract;
pub mod format;
pub mod guard;
pub mod ids;
pub mod response;

pub use extract::{ApiJson, ApiQuery};
pub use format::{project_field, Shaper};
pub use guard::guard;
pub use ids::{decode, empty_as_none, encode, EntityId, InvalidIdentifier};
pub use response::{ApiResponse, ApiResult};
