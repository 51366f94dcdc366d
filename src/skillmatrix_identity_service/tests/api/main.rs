mod helpers;

mod login;
mod password;
mod signup;
mod verify_email;
mod verify_token;
