pub mod key_size;
pub mod pem;

pub use key_size::KeySize;
pub use pem::{decode_pem, format_pem, KeyKind, LINE_WIDTH};
