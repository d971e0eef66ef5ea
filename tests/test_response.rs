use wicket::http::request::Version;
use wicket::http::response::{Body, Response, Status};
use wicket::http::writer::serialize_head;

#[test]
fn test_status_as_u16() {
    assert_eq!(Status::Ok.as_u16(), 200);
    assert_eq!(Status::BadRequest.as_u16(), 400);
    assert_eq!(Status::NotFound.as_u16(), 404);
    assert_eq!(Status::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_reason_phrase() {
    assert_eq!(Status::Ok.reason_phrase(), "OK");
    assert_eq!(Status::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(Status::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        Status::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_response_defaults() {
    let res = Response::new(Version::Http11);

    assert_eq!(res.status, Status::Ok);
    assert_eq!(res.version, Version::Http11);
    assert!(res.headers.is_empty());
    assert_eq!(res.body, Body::Empty);
}

#[test]
fn test_server_error_response() {
    let res = Response::server_error(Version::Http10, "something broke");

    assert_eq!(res.status, Status::InternalServerError);
    assert_eq!(res.version, Version::Http10);
    assert_eq!(res.body, Body::Text("something broke".to_string()));
}

#[test]
fn test_serialize_head_without_headers() {
    let res = Response::new(Version::Http11);
    assert_eq!(serialize_head(&res), b"HTTP/1.1 200 OK\r\n\r\n");
}

#[test]
fn test_serialize_head_mirrors_version() {
    let res = Response::new(Version::Http10);
    assert_eq!(serialize_head(&res), b"HTTP/1.0 200 OK\r\n\r\n");
}

#[test]
fn test_serialize_head_header_order_is_insertion_order() {
    let mut res = Response::new(Version::Http11);
    res.headers.insert("Content-Type", "text/plain");
    res.headers.insert("X-Second", "2");
    res.headers.insert("X-Third", "3");
    // Overwriting keeps the original position
    res.headers.insert("X-Second", "two");

    assert_eq!(
        serialize_head(&res),
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nX-Second: two\r\nX-Third: 3\r\n\r\n"
    );
}

#[test]
fn test_serialize_head_is_idempotent() {
    let mut res = Response::new(Version::Http11);
    res.status = Status::NotFound;
    res.headers.insert("X-Reason", "missing");

    assert_eq!(serialize_head(&res), serialize_head(&res));
}

#[test]
fn test_serialize_head_for_error_status() {
    let res = Response::server_error(Version::Http11, "boom");

    // The body is not part of the head
    assert_eq!(
        serialize_head(&res),
        b"HTTP/1.1 500 Internal Server Error\r\n\r\n"
    );
}
