pub mod activate;
pub mod install;
pub mod io;
pub mod paths;
pub mod reporter;
pub mod resolver;

pub use activate::{activate, active_target};
pub use install::{InstallError, install, installed_path};
pub use paths::*;
pub use reporter::{NullReporter, Reporter};
pub use resolver::resolve_build;

/// User Agent string for core operations
pub const USER_AGENT: &str = concat!("relm/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by index and artifact requests.
///
/// No request timeout is configured; a stalled server stalls the invocation.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}
