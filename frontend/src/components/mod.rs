pub mod fail_machine;
pub mod login;
pub mod status;
pub mod use_machine;
