mod input;

pub use input::{decode_line, read_stdin_text, ENCODING_ENV};
