//! Firestore REST client backing the [`ContentStore`] trait.
//!
//! Documents are exchanged over the `v1` REST surface with an API key.
//! Firestore's wire format wraps every field in a typed envelope
//! (`stringValue`, `mapValue`, ...), so this module carries a small codec
//! between plain `serde_json::Value` and that envelope; the rest of the
//! backend never sees the envelope.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::error::{ApiError, ApiResult};

use super::ContentStore;

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

#[derive(Clone)]
pub struct FirestoreClient {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    api_key: String,
}

impl FirestoreClient {
    pub fn new(project_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: FIRESTORE_BASE_URL.to_string(),
            project_id: project_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from `FIRESTORE_PROJECT_ID` and `FIRESTORE_API_KEY`.
    pub fn from_env() -> ApiResult<Self> {
        let project_id = std::env::var("FIRESTORE_PROJECT_ID")
            .map_err(|_| ApiError::missing_env("FIRESTORE_PROJECT_ID"))?;
        let api_key = std::env::var("FIRESTORE_API_KEY")
            .map_err(|_| ApiError::missing_env("FIRESTORE_API_KEY"))?;
        Ok(Self::new(project_id, api_key))
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.base_url, self.project_id, collection
        )
    }

    fn document_url(&self, collection: &str, doc: &str) -> String {
        format!("{}/{}", self.collection_url(collection), doc)
    }
}

#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<FirestoreDocument>,
}

impl FirestoreDocument {
    /// The document id is the last path segment of the resource name.
    fn id(&self) -> String {
        self.name
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string()
    }
}

#[async_trait]
impl ContentStore for FirestoreClient {
    async fn get_document(&self, collection: &str, doc: &str) -> ApiResult<Option<Value>> {
        let url = format!(
            "{}?key={}",
            self.document_url(collection, doc),
            urlencoding::encode(&self.api_key)
        );
        let response = self.http.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let document: FirestoreDocument = response.error_for_status()?.json().await?;
        Ok(Some(decode_fields(&document.fields)))
    }

    async fn set_document(&self, collection: &str, doc: &str, fields: Value) -> ApiResult<()> {
        let url = format!(
            "{}?key={}",
            self.document_url(collection, doc),
            urlencoding::encode(&self.api_key)
        );
        let body = json!({ "fields": encode_fields(&fields)? });

        self.http
            .patch(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn add_document(&self, collection: &str, fields: Value) -> ApiResult<String> {
        let url = format!(
            "{}?key={}",
            self.collection_url(collection),
            urlencoding::encode(&self.api_key)
        );
        let body = json!({ "fields": encode_fields(&fields)? });

        let document: FirestoreDocument = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(document.id())
    }

    async fn list_documents(
        &self,
        collection: &str,
        order_by: &str,
        descending: bool,
    ) -> ApiResult<Vec<(String, Value)>> {
        let direction = if descending { "desc" } else { "asc" };
        let url = format!(
            "{}?key={}&pageSize=300&orderBy={}",
            self.collection_url(collection),
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&format!("{} {}", order_by, direction))
        );

        let response: ListDocumentsResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response
            .documents
            .iter()
            .map(|d| (d.id(), decode_fields(&d.fields)))
            .collect())
    }
}

/// Encode a plain JSON object into Firestore's `fields` map.
fn encode_fields(value: &Value) -> ApiResult<Value> {
    let Value::Object(map) = value else {
        return Err(ApiError::store("document fields must be a JSON object"));
    };

    let mut fields = Map::new();
    for (key, val) in map {
        fields.insert(key.clone(), encode_value(val));
    }
    Ok(Value::Object(fields))
}

fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                // integers travel as strings on the wire
                json!({ "integerValue": i.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => {
            let mut fields = Map::new();
            for (key, val) in map {
                fields.insert(key.clone(), encode_value(val));
            }
            json!({ "mapValue": { "fields": fields } })
        }
    }
}

/// Decode Firestore's `fields` map back into a plain JSON object.
fn decode_fields(fields: &Map<String, Value>) -> Value {
    let mut map = Map::new();
    for (key, val) in fields {
        map.insert(key.clone(), decode_value(val));
    }
    Value::Object(map)
}

fn decode_value(value: &Value) -> Value {
    let Value::Object(map) = value else {
        return Value::Null;
    };

    if map.contains_key("nullValue") {
        return Value::Null;
    }
    if let Some(b) = map.get("booleanValue") {
        return b.clone();
    }
    if let Some(i) = map.get("integerValue") {
        // arrives as a string, occasionally as a bare number
        let parsed = match i {
            Value::String(s) => s.parse::<i64>().ok(),
            Value::Number(n) => n.as_i64(),
            _ => None,
        };
        return parsed.map(Value::from).unwrap_or(Value::Null);
    }
    if let Some(d) = map.get("doubleValue") {
        return d.clone();
    }
    if let Some(s) = map.get("stringValue") {
        return s.clone();
    }
    if let Some(t) = map.get("timestampValue") {
        return t.clone();
    }
    if let Some(arr) = map.get("arrayValue") {
        let items = arr
            .get("values")
            .and_then(Value::as_array)
            .map(|values| values.iter().map(decode_value).collect())
            .unwrap_or_default();
        return Value::Array(items);
    }
    if let Some(nested) = map.get("mapValue") {
        if let Some(Value::Object(fields)) = nested.get("fields") {
            return decode_fields(fields);
        }
        return Value::Object(Map::new());
    }

    Value::Null
}
