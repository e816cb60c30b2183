//! Auth flow handlers: signup, login, and the current-user lookup.

mod current_user;
mod login;
mod signup;

pub use current_user::{CurrentUserHandler, CurrentUserQuery};
pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use signup::{SignupCommand, SignupHandler, SignupResult};
