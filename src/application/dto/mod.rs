pub mod images;
pub mod serde_time;
pub mod users;

pub use images::FileResponseDto;
pub use users::{UserResponseDto, UserSearchDto};
