//! Runtime configuration and logging shared by the `cryptomepay` command line tool.

pub mod config;
pub mod logging;

/// Load variables from a `.env` file in the working directory, if one exists.
///
/// Call this before parsing any command line type that embeds [`config::Config`].
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}
