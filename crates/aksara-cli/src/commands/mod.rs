pub mod accuracy;
pub mod config_ops;
pub mod convert_ops;
