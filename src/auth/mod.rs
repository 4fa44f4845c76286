//! Login session and link routing.

pub mod links;
pub mod session;

pub use links::{is_checkout_url, LinkPolicy, LinkRoute};
pub use session::{is_authenticated_url, AuthSession, LOGGED_IN_KEY};
