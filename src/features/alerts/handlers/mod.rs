pub mod alert_handler;

pub use alert_handler::{__path_submit_alert, submit_alert, AlertState};
