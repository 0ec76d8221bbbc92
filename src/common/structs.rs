/// Plain message error used at the binary boundary.
pub mod custom_error;
