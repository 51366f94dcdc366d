use askama::Template;
use async_trait::async_trait;
use reqwest::Url;
use secrecy::ExposeSecret;

use skillmatrix_core::{Email, EmailClient, LinkPurpose, NotifierError, VerificationNotifier};

const ACTIVATION_SUBJECT: &str = "Email Verification | Skill Matrix";
const RESET_SUBJECT: &str = "Password Reset | Skill Matrix";

#[derive(Template)]
#[template(path = "activation_email.html")]
struct ActivationEmailTemplate<'a> {
    verification_link: &'a str,
}

#[derive(Template)]
#[template(path = "password_reset_email.html")]
struct PasswordResetEmailTemplate<'a> {
    verification_link: &'a str,
}

/// Renders verification/reset emails and hands them to the mail transport.
///
/// The link carries the sealed token plus the recipient address as query
/// parameters, percent-encoded so arbitrary addresses survive the trip.
#[derive(Clone)]
pub struct LinkMailer<E> {
    email_client: E,
    public_base_url: Url,
}

impl<E> LinkMailer<E>
where
    E: EmailClient,
{
    pub fn new(email_client: E, public_base_url: Url) -> Self {
        Self {
            email_client,
            public_base_url,
        }
    }

    fn verification_url(&self, recipient: &Email, token: &str) -> Result<Url, NotifierError> {
        let mut url = self
            .public_base_url
            .join("/verify-email")
            .map_err(|e| NotifierError::DispatchFailed(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("token", token)
            .append_pair("email", recipient.as_ref().expose_secret());
        Ok(url)
    }
}

#[async_trait]
impl<E> VerificationNotifier for LinkMailer<E>
where
    E: EmailClient,
{
    #[tracing::instrument(name = "Dispatching verification link", skip_all)]
    async fn dispatch_link(
        &self,
        recipient: &Email,
        purpose: LinkPurpose,
        token: &str,
    ) -> Result<(), NotifierError> {
        let link = self.verification_url(recipient, token)?;

        let (subject, body) = match purpose {
            LinkPurpose::ActivateAccount => (
                ACTIVATION_SUBJECT,
                ActivationEmailTemplate {
                    verification_link: link.as_str(),
                }
                .render(),
            ),
            LinkPurpose::PasswordReset => (
                RESET_SUBJECT,
                PasswordResetEmailTemplate {
                    verification_link: link.as_str(),
                }
                .render(),
            ),
        };
        let body = body.map_err(|e| NotifierError::DispatchFailed(e.to_string()))?;

        self.email_client
            .send_email(recipient, subject, &body)
            .await
            .map_err(NotifierError::DispatchFailed)
    }
}
