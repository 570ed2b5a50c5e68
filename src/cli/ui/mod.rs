mod output;
mod report;

pub use output::Output;
pub use report::{checklist_rows, print_checklist, print_deployment, render_link, render_report};
