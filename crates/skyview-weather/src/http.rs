//! Shared HTTP plumbing for the provider clients.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::types::WeatherError;

/// Build the client shared by all providers. No timeout override: requests
/// run until the platform gives up.
pub fn build_client(user_agent: &str) -> Result<Client, WeatherError> {
    let client = Client::builder().user_agent(user_agent).build()?;
    Ok(client)
}

/// GET `url` and decode the JSON body.
///
/// Transport failures and non-success statuses surface as
/// [`WeatherError::Network`]; bodies that do not match `T` as
/// [`WeatherError::Parse`].
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, WeatherError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))
}
