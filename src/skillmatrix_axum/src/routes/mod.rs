pub mod forgot_password;
pub mod login;
pub mod signup;
pub mod update_password;
pub mod verify_email;
pub mod verify_token;

pub use forgot_password::forgot_password;
pub use login::login;
pub use signup::signup;
pub use update_password::update_password;
pub use verify_email::verify_email;
pub use verify_token::verify_token;
