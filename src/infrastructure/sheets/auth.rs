use error_stack::{Result, ResultExt};
use google_sheets4::oauth2::{self, authenticator::Authenticator};
use google_sheets4::{hyper, hyper_rustls};

use crate::infrastructure::config::sheets_config::SpreadsheetConfig;

use super::spreadsheet_manager::SpreadsheetManagerError;

/// Builds a service-account authenticator from the key file at
/// `config.priv_key`. A missing or malformed key file fails here, before any
/// network call is attempted. Token handling beyond that is left to the
/// underlying oauth2 client.
pub async fn auth(
    config: &SpreadsheetConfig,
    client: hyper::Client<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
) -> Result<
    Authenticator<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
    SpreadsheetManagerError,
> {
    let priv_key_path = config.priv_key.as_ref();
    let secret: oauth2::ServiceAccountKey = oauth2::read_service_account_key(priv_key_path)
        .await
        .change_context(SpreadsheetManagerError::FailedToReadCredentials)
        .attach_printable_lazy(|| {
            format!(
                "Could not read service account private key at '{}'",
                priv_key_path
            )
        })?;

    oauth2::ServiceAccountAuthenticator::with_client(secret, client)
        .build()
        .await
        .change_context(SpreadsheetManagerError::FailedToBuildAuthenticator)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::infrastructure::sheets::http_client::http_client;

    fn config_with_key_path(path: &str) -> SpreadsheetConfig {
        SpreadsheetConfig {
            priv_key: path.into(),
            spreadsheet_id: "irrelevant".into(),
        }
    }

    #[tokio::test]
    async fn test_missing_key_file_fails_before_any_network_call() {
        let config = config_with_key_path("/nonexistent/credentials.json");
        let result = auth(&config, http_client()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_malformed_key_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not a service account key").unwrap();
        let config = config_with_key_path(file.path().to_str().unwrap());
        let result = auth(&config, http_client()).await;
        assert!(result.is_err());
    }
}
