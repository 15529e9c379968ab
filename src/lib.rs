pub mod compare;
pub mod dropbox;
pub mod error;
pub mod local;
pub mod token;

pub use crate::compare::missing_locally_in_remote;
pub use crate::dropbox::{DropboxClient, EntryTag, ListingOptions, ListingPage, RemoteEntry};
pub use crate::error::{Error, RequestError, Result};
pub use crate::local::LocalEntry;
