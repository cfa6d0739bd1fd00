use std::sync::LazyLock;

use reqwest::{Client, Method, RequestBuilder, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use types::{Collection, Record, Result};

use crate::CONFIG;

pub static RECORDS: LazyLock<RecordsClient> =
    LazyLock::new(|| RecordsClient::new(CONFIG.api_url.clone(), CONFIG.api_token.clone()));

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.send().await?.error_for_status()?;
        let body = response.bytes().await?;

        match serde_json::from_slice(&body) {
            Ok(value) => Ok(value),
            Err(error) => {
                tracing::debug!(
                    %error,
                    body = %String::from_utf8_lossy(&body),
                    "response body did not parse"
                );
                Err(error.into())
            }
        }
    }
}

/// Client for the external record-storage service. One generic CRUD surface
/// covers all five collections.
#[derive(Clone)]
pub struct RecordsClient {
    client: Client,
    base_url: Url,
    token: SecretString,
}

impl RecordsClient {
    pub fn new(base_url: Url, token: SecretString) -> Self {
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path)?;

        Ok(self
            .client
            .request(method, url)
            .bearer_auth(self.token.expose_secret()))
    }

    fn records_path(collection: Collection) -> String {
        format!("/gateway/apps/{}/records", collection.app_id())
    }

    fn record_path(collection: Collection, record_id: &str) -> String {
        format!("/gateway/apps/{}/records/{}", collection.app_id(), record_id)
    }

    pub async fn list<F: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<Record<F>>> {
        self.request(Method::GET, &Self::records_path(collection))?
            .try_send()
            .await
    }

    pub async fn create<F: Serialize + DeserializeOwned>(
        &self,
        collection: Collection,
        fields: &F,
    ) -> Result<Record<F>> {
        self.request(Method::POST, &Self::records_path(collection))?
            .json(&json!({ "fields": fields }))
            .try_send()
            .await
    }

    pub async fn update<F: Serialize + DeserializeOwned>(
        &self,
        collection: Collection,
        record_id: &str,
        fields: &F,
    ) -> Result<Record<F>> {
        self.request(Method::PUT, &Self::record_path(collection, record_id))?
            .json(&json!({ "fields": fields }))
            .try_send()
            .await
    }

    pub async fn delete(&self, collection: Collection, record_id: &str) -> Result<()> {
        // The service answers DELETE with an empty body, so only the status
        // is checked.
        self.request(Method::DELETE, &Self::record_path(collection, record_id))?
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_embed_the_collection_app_id() {
        let app_id = Collection::Rooms.app_id();
        assert_eq!(
            RecordsClient::records_path(Collection::Rooms),
            format!("/gateway/apps/{app_id}/records")
        );
        assert_eq!(
            RecordsClient::record_path(Collection::Rooms, "rec7"),
            format!("/gateway/apps/{app_id}/records/rec7")
        );
    }
}
