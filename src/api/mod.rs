mod ascii;

pub use ascii::{handle_ascii, parse_width, AsciiResponse};
