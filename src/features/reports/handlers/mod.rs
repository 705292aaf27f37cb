pub mod report_handler;

pub use report_handler::{
    __path_get_report, __path_list_reports, __path_submit_report, get_report, list_reports,
    submit_report, ReportState,
};
