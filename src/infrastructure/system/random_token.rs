//! Random request token adapter

use crate::application::ports::RequestTokenSource;

/// Draws a uniformly random 32-bit token per post
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTokenSource;

impl RandomTokenSource {
    pub fn new() -> Self {
        Self
    }
}

impl RequestTokenSource for RandomTokenSource {
    fn next_token(&self) -> i32 {
        rand::random()
    }
}
