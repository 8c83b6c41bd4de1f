//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, SignedToken};
pub use password::PasswordService;
