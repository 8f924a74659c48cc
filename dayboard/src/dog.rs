//! The featured-dog fetch.
//!
//! One GET against a public random-dog-image endpoint, fire-and-forget: no
//! retry, no timeout, no cancellation. Failures are logged once and dropped,
//! and the page keeps showing whatever dog it had.

use model::Msg;
use serde::Deserialize;
use std::sync::mpsc;
use thiserror::Error;
use tracing::warn;

/// The ways a single fetch can fail. All of them end in one log line.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct DogResponse {
    message: String,
}

/// GET the endpoint and pull the image URL out of `{"message": ...}`.
pub async fn fetch_random_dog(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    let body = response.text().await?;
    let dog: DogResponse = serde_json::from_str(&body)?;
    Ok(dog.message)
}

/// Run one fetch and hand the result to the event loop, if it is still there.
pub async fn fetch_and_send(client: reqwest::Client, url: String, tx: mpsc::Sender<Msg>) {
    match fetch_random_dog(&client, &url).await {
        Ok(dog_url) => {
            // the receiver is gone once the loop has quit; a late response
            // dies here instead of mutating torn-down state
            let _ = tx.send(Msg::DogFetched(dog_url));
        }
        Err(err) => warn!("dog fetch failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on an ephemeral port.
    async fn one_shot_server(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 512];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{addr}")
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\n\
             content-type: application/json\r\n\
             content-length: {}\r\n\
             connection: close\r\n\r\n{body}",
            body.len()
        )
    }

    #[tokio::test]
    async fn test_fetch_returns_message_url() {
        let body = r#"{"message":"https://images.dog.ceo/breeds/hound/n102.jpg","status":"success"}"#;
        let url = one_shot_server(http_response("200 OK", body)).await;

        let got = fetch_random_dog(&reqwest::Client::new(), &url).await.unwrap();
        assert_eq!(got, "https://images.dog.ceo/breeds/hound/n102.jpg");
    }

    #[tokio::test]
    async fn test_non_2xx_is_status_error() {
        let url = one_shot_server(http_response("404 Not Found", "{}")).await;

        let err = fetch_random_dog(&reqwest::Client::new(), &url)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 404));
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let url = one_shot_server(http_response("200 OK", "<html>not json</html>")).await;

        let err = fetch_random_dog(&reqwest::Client::new(), &url)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::MalformedBody(_)));
    }

    #[tokio::test]
    async fn test_missing_message_field_is_malformed() {
        let url = one_shot_server(http_response("200 OK", r#"{"status":"success"}"#)).await;

        let err = fetch_random_dog(&reqwest::Client::new(), &url)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::MalformedBody(_)));
    }

    #[tokio::test]
    async fn test_success_is_delivered_to_the_loop() {
        let body = r#"{"message":"https://example.com/dog.png"}"#;
        let url = one_shot_server(http_response("200 OK", body)).await;
        let (tx, rx) = mpsc::channel();

        fetch_and_send(reqwest::Client::new(), url, tx).await;

        assert_eq!(
            rx.try_recv().unwrap(),
            Msg::DogFetched("https://example.com/dog.png".into())
        );
    }

    #[tokio::test]
    async fn test_failure_sends_nothing() {
        let url = one_shot_server(http_response("500 Internal Server Error", "{}")).await;
        let (tx, rx) = mpsc::channel::<Msg>();

        fetch_and_send(reqwest::Client::new(), url, tx).await;

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_late_response_dropped_after_teardown() {
        let body = r#"{"message":"https://example.com/dog.png"}"#;
        let url = one_shot_server(http_response("200 OK", body)).await;
        let (tx, rx) = mpsc::channel::<Msg>();
        drop(rx);

        // must complete quietly with nowhere to deliver
        fetch_and_send(reqwest::Client::new(), url, tx).await;
    }
}
