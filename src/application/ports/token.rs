//! Request token port interface

/// Port for the per-post tap-trigger token.
///
/// Tokens should be unique per post so that two notifications never share
/// one trigger configuration. Collisions are not detected.
pub trait RequestTokenSource: Send + Sync {
    fn next_token(&self) -> i32;
}
