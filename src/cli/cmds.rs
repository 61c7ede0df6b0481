pub mod clean;
pub mod init;
pub mod root;
pub mod view;
