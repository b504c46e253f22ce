use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use rigshare::presentation::http::extractors::USER_ID_HEADER;
use tower::util::ServiceExt as _;

mod support;
use support::{assert_error_response, make_test_router, read_json, user};

fn two_users() -> Vec<rigshare::domain::user::User> {
    vec![user(1, "alice"), user(2, "bob")]
}

#[tokio::test]
async fn me_without_user_header_returns_401() {
    let app = make_test_router(two_users(), Vec::new());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/users/me")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn me_with_garbage_user_header_returns_401() {
    let app = make_test_router(two_users(), Vec::new());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/users/me")
        .header(USER_ID_HEADER, "not-a-number")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn me_returns_own_profile_without_like_fields() {
    let app = make_test_router(two_users(), Vec::new());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/users/me")
        .header(USER_ID_HEADER, "1")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json["username"], "alice");
    assert!(json.get("is_liked").is_none());
    assert!(json.get("total_like").is_none());
}

#[tokio::test]
async fn me_for_deleted_account_returns_404() {
    let app = make_test_router(two_users(), Vec::new());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/users/me")
        .header(USER_ID_HEADER, "99")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn profile_by_username_carries_viewer_like_info() {
    let app = make_test_router(two_users(), vec![(1, 2)]);

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/users/bob")
        .header(USER_ID_HEADER, "1")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json["username"], "bob");
    assert_eq!(json["is_liked"], true);
    assert_eq!(json["total_like"], 1);
}

#[tokio::test]
async fn unknown_username_returns_404() {
    let app = make_test_router(two_users(), Vec::new());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/users/zoe")
        .header(USER_ID_HEADER, "1")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn search_needs_no_user_header() {
    let app = make_test_router(two_users(), Vec::new());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/users?q=ali")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json.as_array().map(Vec::len), Some(1));
    assert_eq!(json[0]["username"], "alice");
}

#[tokio::test]
async fn update_motto_roundtrips_through_the_api() {
    let app = make_test_router(two_users(), Vec::new());

    let body = serde_json::json!({ "motto": "keyboards first" }).to_string();
    let req = Request::builder()
        .method(Method::PUT)
        .uri("/api/v1/users/me/motto")
        .header(USER_ID_HEADER, "1")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json["motto"], "keyboards first");
}

#[tokio::test]
async fn overlong_motto_returns_400() {
    let app = make_test_router(two_users(), Vec::new());

    let overlong = "x".repeat(rigshare::domain::user::Motto::MAX_LENGTH + 1);
    let body = serde_json::json!({ "motto": overlong }).to_string();
    let req = Request::builder()
        .method(Method::PUT)
        .uri("/api/v1/users/me/motto")
        .header(USER_ID_HEADER, "1")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn avatar_upload_accepts_a_multipart_image_field() {
    let app = make_test_router(two_users(), Vec::new());

    let boundary = "rigshare-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"image\"; filename=\"rig.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         pixels\r\n\
         --{boundary}--\r\n"
    );
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/users/me/image")
        .header(USER_ID_HEADER, "1")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json["original_name"], "rig.png");
    assert_eq!(json["content_type"], "image/png");
    assert_eq!(json["size"], 6);
}

#[tokio::test]
async fn avatar_upload_without_image_field_returns_400() {
    let app = make_test_router(two_users(), Vec::new());

    let boundary = "rigshare-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"attachment\"; filename=\"rig.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         pixels\r\n\
         --{boundary}--\r\n"
    );
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/users/me/image")
        .header(USER_ID_HEADER, "1")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = make_test_router(Vec::new(), Vec::new());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = read_json(resp).await;
    assert_eq!(json["status"], "ok");
}
