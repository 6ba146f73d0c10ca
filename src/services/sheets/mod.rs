use serde::Deserialize;
use serde_json::{json, Value};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Google Sheets wrapper: OAuth code/token plumbing plus the two calls the
/// sync feature actually needs (values append, values get). Errors are
/// opaque strings; there is no retry or conflict handling.
#[derive(Clone)]
pub struct SheetsLayer {
    client_id: String,
    client_secret: String,
    redirect_url: String,
    pub service_token: Option<String>,
    http: reqwest::Client,
}

#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub expires_in: i64,
}

impl SheetsLayer {
    pub fn new(
        client_id: String,
        client_secret: String,
        redirect_url: String,
        service_token: Option<String>,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_url,
            service_token,
            http: reqwest::Client::new(),
        }
    }

    pub fn consent_url(&self, state: &str) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=offline&prompt=consent&state={}",
            GOOGLE_AUTH_URL,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_url),
            urlencoding::encode(SHEETS_SCOPE),
            urlencoding::encode(state),
        )
    }

    pub async fn exchange_code(&self, code: String) -> Result<TokenResponse, String> {
        let params = [
            ("code", code.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_url.as_str()),
            ("grant_type", "authorization_code"),
        ];

        self.token_request(&params).await
    }

    pub async fn refresh_access_token(&self, refresh_token: String) -> Result<TokenResponse, String> {
        let params = [
            ("refresh_token", refresh_token.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "refresh_token"),
        ];

        self.token_request(&params).await
    }

    async fn token_request(&self, params: &[(&str, &str)]) -> Result<TokenResponse, String> {
        let response = self
            .http
            .post(GOOGLE_TOKEN_URL)
            .form(params)
            .send()
            .await
            .map_err(|e| format!("Token request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Token endpoint returned {status}: {body}"));
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| format!("Token response decode failed: {e}"))
    }

    /// Write mode of the sync: one `values:append` call.
    pub async fn append_row(
        &self,
        access_token: &str,
        spreadsheet_id: &str,
        sheet_name: &str,
        row: Vec<String>,
    ) -> Result<(), String> {
        let url = format!(
            "{}/{}/values/{}:append?valueInputOption=USER_ENTERED",
            SHEETS_API_BASE,
            spreadsheet_id,
            urlencoding::encode(sheet_name),
        );

        let body = json!({ "values": [row] });

        let response = self
            .http
            .post(url)
            .bearer_auth(access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Sheet append failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Sheets API returned {status}: {body}"));
        }

        Ok(())
    }

    /// Read mode of the sync: one range get. The 30-second poll lives in the
    /// browser, which just hits this repeatedly.
    pub async fn read_range(
        &self,
        access_token: &str,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<Vec<Vec<String>>, String> {
        let url = format!(
            "{}/{}/values/{}",
            SHEETS_API_BASE,
            spreadsheet_id,
            urlencoding::encode(range),
        );

        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| format!("Sheet read failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Sheets API returned {status}: {body}"));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| format!("Sheets response decode failed: {e}"))?;

        let rows = body
            .get("values")
            .and_then(|v| v.as_array())
            .map(|rows| {
                rows.iter()
                    .map(|row| {
                        row.as_array()
                            .map(|cells| {
                                cells
                                    .iter()
                                    .map(|cell| match cell {
                                        Value::String(s) => s.clone(),
                                        other => other.to_string(),
                                    })
                                    .collect()
                            })
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(rows)
    }
}
