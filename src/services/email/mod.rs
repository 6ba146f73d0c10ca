use resend_rs::{types::CreateEmailBaseOptions, Resend};

#[derive(Clone)]
pub struct EmailLayer {
    api_key: String,
    pub domain: String,
}

impl EmailLayer {
    pub fn new(api_key: String, domain: String) -> Self {
        Self { api_key, domain }
    }

    fn sender(&self) -> String {
        format!("Formbay <noreply@{}>", &self.domain)
    }

    pub async fn send_email_verification(
        &self,
        to: String,
        code: String,
    ) -> Result<(), resend_rs::Error> {
        let resend = Resend::new(&self.api_key);

        let to = [to];
        let subject = "Formbay - Verify your email";

        let email = CreateEmailBaseOptions::new(self.sender(), to, subject).with_html(
            format!(
                "<p>Your verification code:</p><strong>{}</strong><p>It expires in 5 minutes.</p>",
                code
            )
            .as_str(),
        );

        let _email = resend.emails.send(email).await?;

        Ok(())
    }

    pub async fn send_password_reset(
        &self,
        to: String,
        reset_token: String,
    ) -> Result<(), resend_rs::Error> {
        let resend = Resend::new(&self.api_key);

        let to = [to];
        let subject = "Formbay - Password Reset";

        let password_reset_url =
            format!("https://{}/auth/password-reset/{}", &self.domain, reset_token);

        let email = CreateEmailBaseOptions::new(self.sender(), to, subject).with_html(
            format!(
                "<a href=\"{}\">Reset your password</a><p>The link expires in 30 minutes.</p>",
                password_reset_url
            )
            .as_str(),
        );

        let _email = resend.emails.send(email).await?;

        Ok(())
    }

    /// Sent from the payment webhook once the gateway reports "paid".
    pub async fn send_payment_receipt(
        &self,
        to: String,
        order_id: String,
        amount: i64,
        currency: String,
        share_slug: String,
    ) -> Result<(), resend_rs::Error> {
        let resend = Resend::new(&self.api_key);

        let to = [to];
        let subject = "Formbay - Your share link is active";

        let share_url = format!("https://{}/s/{}", &self.domain, share_slug);

        let email = CreateEmailBaseOptions::new(self.sender(), to, subject).with_html(
            format!(
                "<p>Payment received for order <strong>{}</strong> ({} {:.2}).</p>\
                 <p>Your form is now live at <a href=\"{}\">{}</a>.</p>",
                order_id,
                currency,
                amount as f64 / 100.0,
                share_url,
                share_url
            )
            .as_str(),
        );

        let _email = resend.emails.send(email).await?;

        Ok(())
    }
}
