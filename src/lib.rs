pub mod api;
mod trace_init;

pub use aksara_core::{explain, morse, script, settings, transliterate, unicode};

pub use api::{
    decode_morse_request, encode_morse_request, transliterate_request, AksaraError, Response,
};
