use clap::Parser;
use dropbox_diff::dropbox::DEFAULT_API_URL;
use dropbox_diff::token::DEFAULT_TOKEN_FILE;
use dropbox_diff::{Error, ListingOptions};

pub const USAGE: &str = "dropbox-diff --dropbox <dropbox path> <local path>";

/// CLI arguments for dropbox-diff
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, override_usage = USAGE)]
pub struct Cli {
    /// Dropbox directory path to check against
    #[arg(long)]
    pub dropbox: String,

    /// Local directory whose files are looked up in Dropbox
    pub local: String,

    /// File holding the Dropbox bearer token
    #[arg(long, default_value = DEFAULT_TOKEN_FILE)]
    pub token_file: String,

    /// List the Dropbox folder recursively
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Ask Dropbox to include media info in the listing
    #[arg(long, default_value_t = false)]
    pub include_media_info: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    #[arg(long, default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,
}

impl Cli {
    pub fn validate(&self) -> Result<(), Error> {
        if self.dropbox.is_empty() {
            return Err(Error::Config(format!(
                "You need to specify dropbox path using --dropbox flag\n\n{}",
                USAGE
            )));
        }
        Ok(())
    }

    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            recursive: self.recursive,
            include_media_info: self.include_media_info,
        }
    }
}
