//! Stateless HTTP request builder and response parser for the records API.
//!
//! # Design
//! `RecordClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Backends differ on success codes (json-server answers 200 where the mock
//! server answers 201/204), so every parser takes a set of accepted statuses.

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewRecord, Record, RecordId};

/// Path of the records collection below the base URL.
pub const RESOURCE: &str = "todos";

const LIST_OK: &[u16] = &[200];
const CREATE_OK: &[u16] = &[200, 201];
const DELETE_OK: &[u16] = &[200, 204];

/// Synchronous, stateless client for the records API.
#[derive(Debug, Clone)]
pub struct RecordClient {
    base_url: String,
}

impl RecordClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_records(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/{RESOURCE}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_record(&self, input: &NewRecord) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/{RESOURCE}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// The id's text form becomes one percent-encoded path segment.
    pub fn build_delete_record(&self, id: &RecordId) -> Result<HttpRequest, ApiError> {
        let collection = format!("{}/{RESOURCE}", self.base_url);
        let mut url =
            Url::parse(&collection).map_err(|e| ApiError::InvalidUrl(format!("{collection}: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(collection.clone()))?
            .push(&id.to_string());
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn parse_list_records(&self, response: HttpResponse) -> Result<Vec<Record>, ApiError> {
        check_status(&response, LIST_OK)?;
        decode(&response)
    }

    pub fn parse_create_record(&self, response: HttpResponse) -> Result<Record, ApiError> {
        check_status(&response, CREATE_OK)?;
        decode(&response)
    }

    /// The body of a successful delete is ignored.
    pub fn parse_delete_record(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, DELETE_OK)?;
        Ok(())
    }
}

/// Deserialize the body. A non-JSON content type is named in the error.
fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| match response.header("content-type") {
        Some(content_type) if !content_type.contains("json") => {
            ApiError::DeserializationError(format!("{e} (content-type {content_type})"))
        }
        _ => ApiError::DeserializationError(e.to_string()),
    })
}

/// Map statuses outside `accepted` to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, accepted: &[u16]) -> Result<(), ApiError> {
    if accepted.contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RecordClient {
        RecordClient::new("http://localhost:8000")
    }

    const ANN: &str = r#"{"id":1,"name":"Ann","email":"a@b.com","username":"ann1"}"#;

    #[test]
    fn build_list_records_produces_correct_request() {
        let req = client().build_list_records();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_record_produces_correct_request() {
        let input = NewRecord {
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            username: "ann1".to_string(),
        };
        let req = client().build_create_record(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:8000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Ann");
        assert_eq!(body["email"], "a@b.com");
        assert_eq!(body["username"], "ann1");
    }

    #[test]
    fn build_delete_record_uses_id_verbatim() {
        let req = client().build_delete_record(&RecordId::from(42)).unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:8000/todos/42");
        assert!(req.body.is_none());

        let req = client().build_delete_record(&RecordId::from("abc-1")).unwrap();
        assert_eq!(req.url, "http://localhost:8000/todos/abc-1");

        let negative: RecordId = serde_json::from_str("-3").unwrap();
        let req = client().build_delete_record(&negative).unwrap();
        assert_eq!(req.url, "http://localhost:8000/todos/-3");
    }

    #[test]
    fn build_delete_record_escapes_text_ids() {
        let req = client().build_delete_record(&RecordId::from("a/b")).unwrap();
        assert_eq!(req.url, "http://localhost:8000/todos/a%2Fb");

        let req = client().build_delete_record(&RecordId::from("two words")).unwrap();
        assert_eq!(req.url, "http://localhost:8000/todos/two%20words");

        let req = client().build_delete_record(&RecordId::from("x?y#z")).unwrap();
        assert_eq!(req.url, "http://localhost:8000/todos/x%3Fy%23z");
    }

    #[test]
    fn build_delete_record_rejects_unusable_base() {
        let err = RecordClient::new("not a url")
            .build_delete_record(&RecordId::from(1))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn parse_list_records_success() {
        let response = HttpResponse::new(200, format!("[{ANN}]"));
        let records = client().parse_list_records(response).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Ann");
    }

    #[test]
    fn parse_list_records_bad_json() {
        let response = HttpResponse::new(200, "not json");
        let err = client().parse_list_records(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn decode_error_names_non_json_content_type() {
        let response =
            HttpResponse::new(200, "<html>").with_header("Content-Type", "text/html; charset=utf-8");
        let err = client().parse_list_records(response).unwrap_err();
        let ApiError::DeserializationError(message) = err else {
            panic!("expected a deserialization error, got {err:?}");
        };
        assert!(message.ends_with("(content-type text/html; charset=utf-8)"), "{message}");

        let response = HttpResponse::new(200, "{").with_header("content-type", "application/json");
        let err = client().parse_list_records(response).unwrap_err();
        assert!(!err.to_string().contains("content-type"));
    }

    #[test]
    fn parse_create_record_accepts_200_and_201() {
        for status in [200, 201] {
            let record = client()
                .parse_create_record(HttpResponse::new(status, ANN))
                .unwrap();
            assert_eq!(record.id, RecordId::from(1));
        }
    }

    #[test]
    fn parse_create_record_wrong_status() {
        let response = HttpResponse::new(500, "internal error");
        let err = client().parse_create_record(response).unwrap_err();
        assert_eq!(
            err,
            ApiError::HttpError {
                status: 500,
                body: "internal error".to_string()
            }
        );
    }

    #[test]
    fn parse_delete_record_accepts_200_and_204() {
        assert!(client().parse_delete_record(HttpResponse::new(204, "")).is_ok());
        assert!(client().parse_delete_record(HttpResponse::new(200, "{}")).is_ok());
    }

    #[test]
    fn parse_delete_record_not_found() {
        let err = client()
            .parse_delete_record(HttpResponse::new(404, ""))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = RecordClient::new("http://localhost:8000/");
        let req = client.build_list_records();
        assert_eq!(req.url, "http://localhost:8000/todos");
    }
}
