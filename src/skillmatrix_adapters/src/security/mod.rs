pub mod argon2_hasher;
pub mod link_cipher;
pub mod session_token;
