pub mod link_mailer;
pub mod mock_email_client;
pub mod postmark_email_client;
