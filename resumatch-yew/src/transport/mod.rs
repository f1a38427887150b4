mod browser_file;
mod http_client;

pub use browser_file::{files_from_input, BrowserFile};
pub use http_client::HttpScoringClient;
