//! Command implementations for the huffbit CLI.

pub mod codes;
pub mod digest;
pub mod test;
pub mod utf8;

pub use codes::{CodesOptions, cmd_codes};
pub use digest::cmd_digest;
pub use test::{TestOptions, cmd_test};
pub use utf8::cmd_utf8;

/// Printable form of a byte symbol for tables.
pub(crate) fn symbol_label(symbol: i32) -> String {
    match u8::try_from(symbol) {
        Ok(b) if b.is_ascii_graphic() => format!("'{}'", b as char),
        Ok(b' ') => "' '".to_string(),
        Ok(b) => format!("0x{:02X}", b),
        Err(_) => symbol.to_string(),
    }
}
