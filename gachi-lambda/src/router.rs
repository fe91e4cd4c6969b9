use gachi_shared::utilities::requests::extract_body;
use gachi_shared::utilities::responses::{response_with_code, success_response};
use http::StatusCode;
use lambda_http::RequestExt;
use lambda_http::{Body, Request, Response};

use crate::endpoints::{push, status};

const GET: &str = "GET";
const POST: &str = "POST";

pub async fn handle_lambda(event: Request) -> Result<Response<Body>, lambda_http::Error> {
    let raw_path = event.raw_http_path().to_string();
    let path = raw_path
        .strip_prefix("/dev")
        .or_else(|| raw_path.strip_prefix("/prod"))
        .unwrap_or(&raw_path);

    log::info!("Received request for path: {}", path);

    match (event.method().as_str(), path) {
        //Monitor
        (GET, "/status") => success_response(status::handle().await),

        //Dispatch
        (POST, "/push/send") => {
            let event_body = extract_body(&event);
            push::send::handler(event, event_body).await
        }
        (_, "/push/send") => response_with_code("Method Not Allowed", StatusCode::METHOD_NOT_ALLOWED),

        //Not found
        _ => response_with_code("Not Found", StatusCode::NOT_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: &str, path: &str) -> Request {
        http::Request::builder()
            .method(method)
            .uri(path)
            .body(Body::Empty)
            .unwrap()
            .with_raw_http_path(path)
    }

    #[tokio::test]
    async fn wrong_method_on_dispatch_path_is_405() {
        let response = handle_lambda(request("GET", "/push/send")).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = handle_lambda(request("PUT", "/push/send")).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let response = handle_lambda(request("POST", "/push/unknown")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn status_endpoint_answers_on_get() {
        let response = handle_lambda(request("GET", "/status")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
