//! Test support utilities shared by the workspace's test suites.
//!
//! - [`logging::init`] installs a test-friendly tracing subscriber once.
//! - [`unique_str`] produces unique labels for players and output files.

pub mod logging;

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use test_support::unique_str;
///
/// let id1 = unique_str("player");
/// let id2 = unique_str("player");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("player-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}
