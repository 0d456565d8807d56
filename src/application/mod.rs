// src/application/mod.rs
//
// Application Layer - Console
//
// ARCHITECTURE:
// - Sits above the service, never touches the repository directly
// - Turns raw terminal input into service calls
// - Renders results and errors for people

pub mod error_handling;
pub mod menu;
pub mod report;
pub mod shell;

pub use error_handling::{ErrorResponse, ErrorType};
pub use menu::MenuOption;
pub use report::export_report;
pub use shell::LibraryShell;
