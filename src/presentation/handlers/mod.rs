mod health;
mod process_statement;

pub use health::health_handler;
pub use process_statement::{process_statement_handler, ErrorResponse, ProcessStatementResponse};
