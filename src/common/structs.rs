/// Plain message error used by the command line shell.
pub mod custom_error;
