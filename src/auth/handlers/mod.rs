//! Authentication and user HTTP handlers
//!
//! - `signup` - POST /api/auth/signup
//! - `login` - POST /api/auth/login
//! - `me` - GET /api/auth/me
//! - `list` - GET /api/users
//! - `profile` - PUT /api/users/profile

pub mod list;
pub mod login;
pub mod me;
pub mod profile;
pub mod signup;
pub mod types;

pub use list::list_users;
pub use login::login;
pub use me::get_me;
pub use profile::put_profile;
pub use signup::signup;
