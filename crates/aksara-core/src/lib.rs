pub mod explain;
pub mod morse;
pub mod script;
pub mod settings;
pub mod transliterate;
pub mod unicode;
