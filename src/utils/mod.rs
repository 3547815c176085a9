// Utils compartidos

pub mod constants;
pub mod storage;
pub mod jwt;
pub mod dialog;

pub use constants::*;
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage, get_local_storage, load_json, save_json};
pub use jwt::{parse_jwt, is_token_expired, JwtClaims};
pub use dialog::{alert, confirm};
