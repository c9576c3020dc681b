// HTTP response utilities for JSON + optional Brotli encoding
use async_compression::tokio::bufread::BrotliEncoder;
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Response, StatusCode},
};
use serde::Serialize;
use tokio::io::AsyncReadExt;

/// Whether the client advertised Brotli support with a non-zero quality
pub fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT_ENCODING)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(','))
        .any(|entry| {
            let mut params = entry.split(';').map(str::trim);
            let coding = params.next().unwrap_or_default();
            coding.eq_ignore_ascii_case("br") && params.all(|p| !is_zero_quality(p))
        })
}

fn is_zero_quality(param: &str) -> bool {
    let Some((name, value)) = param.split_once('=') else {
        return false;
    };
    name.trim().eq_ignore_ascii_case("q") && value.trim().parse::<f32>().is_ok_and(|q| q <= 0.0)
}

async fn brotli(bytes: Vec<u8>) -> std::io::Result<Vec<u8>> {
    let cursor = std::io::Cursor::new(bytes);
    let mut encoder = BrotliEncoder::new(cursor);
    let mut compressed = Vec::new();
    encoder.read_to_end(&mut compressed).await?;
    Ok(compressed)
}

/// Serialize `data` as JSON with the given status, compressing when requested
pub async fn json_response<T: Serialize>(
    status: StatusCode,
    data: &T,
    compress: bool,
) -> Result<Response<Body>, StatusCode> {
    let json_bytes = serde_json::to_vec(data).map_err(|e| {
        tracing::error!(error = %e, "JSON serialization error");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let (body_bytes, content_encoding) = if compress {
        let original_len = json_bytes.len();
        let compressed = brotli(json_bytes).await.map_err(|e| {
            tracing::error!(error = %e, "Brotli compression error");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        tracing::trace!(original_len, compressed_len = compressed.len(), "compressed JSON body");
        (compressed, Some("br"))
    } else {
        (json_bytes, None)
    };

    let mut response_builder = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, HeaderValue::from(body_bytes.len()));

    if let Some(encoding) = content_encoding {
        response_builder = response_builder
            .header(header::CONTENT_ENCODING, encoding)
            .header(header::VARY, "accept-encoding");
    }

    response_builder.body(Body::from(body_bytes)).map_err(|e| {
        tracing::error!(error = %e, "response build error");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Raw binary payload, e.g. a decoded thumbnail image
pub fn bytes_response(mime_type: &str, bytes: Vec<u8>) -> Result<Response<Body>, StatusCode> {
    let content_type = HeaderValue::from_str(mime_type)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, HeaderValue::from(bytes.len()))
        .body(Body::from(bytes))
        .map_err(|e| {
            tracing::error!(error = %e, "response build error");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_accepts_brotli() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_brotli(&headers));
        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
        assert!(accepts_brotli(&headers));
    }

    #[test]
    fn test_brotli_coding_token_and_quality() {
        let with = |value: &'static str| {
            let mut headers = HeaderMap::new();
            headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static(value));
            accepts_brotli(&headers)
        };

        assert!(with("br;q=0.5, gzip"));
        assert!(with("gzip;q=1.0, BR"));
        assert!(!with("br;q=0"));
        assert!(!with("gzip, br; q=0.0"));
        assert!(!with("gzip, deflate"));
        assert!(!with("brotli-ish, xbr"));
    }

    #[tokio::test]
    async fn test_plain_json_response() {
        let response = json_response(StatusCode::CREATED, &serde_json::json!({"a": 1}), false)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(response.headers().get(header::CONTENT_ENCODING).is_none());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"a":1}"#);
    }

    #[tokio::test]
    async fn test_compressed_json_response() {
        let payload = vec!["Mago do Tube"; 200];
        let response = json_response(StatusCode::OK, &payload, true).await.unwrap();

        assert_eq!(response.headers()[header::CONTENT_ENCODING], "br");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.len() < serde_json::to_vec(&payload).unwrap().len());
    }

    #[test]
    fn test_bytes_response_sets_content_type() {
        let response = bytes_response("image/png", vec![1, 2, 3]).unwrap();
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert_eq!(response.headers()[header::CONTENT_LENGTH], "3");
    }
}
