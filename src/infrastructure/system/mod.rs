//! Host system adapters: clock, request tokens and permission

mod boot_clock;
mod permission;
mod random_token;

pub use boot_clock::BootClock;
pub use permission::GrantedPermission;
pub use random_token::RandomTokenSource;
