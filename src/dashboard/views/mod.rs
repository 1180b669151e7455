//! Dashboard views

pub mod chrome;
pub mod history;
pub mod result;
pub mod upload;

pub use chrome::{render_footer, render_header};
pub use history::render_history_view;
pub use result::render_result_view;
pub use upload::render_upload_view;
