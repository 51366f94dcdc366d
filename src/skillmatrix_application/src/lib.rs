pub mod use_cases;

pub use use_cases::{
    forgot_password::{ForgotPasswordError, ForgotPasswordUseCase},
    login::{LoginError, LoginUseCase},
    signup::{SignupError, SignupReceipt, SignupUseCase},
    update_password::{UpdatePasswordError, UpdatePasswordUseCase},
    verify_email::{VerifyEmailError, VerifyEmailUseCase},
};
