use h1wire::http::query::QueryParameterBuilder;
use h1wire::http::request::{Method, RequestSerializer};

#[test]
fn test_request_default_serialization() {
    let req = RequestSerializer::new();

    // Method, empty url, then the version suffix: two spaces
    assert_eq!(req.get_result(), "GET  HTTP/1.1\r\n\r\n");
    assert_eq!(req.method(), Method::GET);
}

#[test]
fn test_request_method_tokens() {
    let cases = vec![
        (Method::HEAD, "HEAD"),
        (Method::GET, "GET"),
        (Method::POST, "POST"),
        (Method::PUT, "PUT"),
        (Method::DELETE, "DELETE"),
    ];

    for (method, token) in cases {
        let mut req = RequestSerializer::new();
        req.set_method(method).set_url("/");

        let expected = format!("{} / HTTP/1.1\r\n\r\n", token);
        assert_eq!(req.get_result(), expected.as_str());
        assert_eq!(method.to_string(), token);
    }
}

#[test]
fn test_request_method_from_string() {
    assert_eq!(Method::from_str("HEAD"), Some(Method::HEAD));
    assert_eq!(Method::from_str("DELETE"), Some(Method::DELETE));
    assert_eq!(Method::from_str("OPTIONS"), None);
    assert_eq!(Method::from_str("get"), None); // Case-sensitive
}

#[test]
fn test_request_header_order_ignores_insertion_order() {
    let mut first = RequestSerializer::new();
    first
        .set_url("/")
        .set_host("example.com")
        .set_cookie("session=abc")
        .add_head_value("Accept", "*/*")
        .set_content_type("text/plain");

    let mut second = RequestSerializer::new();
    second
        .set_content_type("text/plain")
        .add_head_value("Accept", "*/*")
        .set_cookie("session=abc")
        .set_url("/")
        .set_host("example.com");

    let expected = "GET / HTTP/1.1\r\n\
                    Accept: */*\r\n\
                    Content-Type: text/plain\r\n\
                    Cookie: session=abc\r\n\
                    Host: example.com\r\n\
                    \r\n";

    assert_eq!(first.get_result(), expected);
    assert_eq!(first.get_result(), second.get_result());
}

#[test]
fn test_request_body_sets_content_length() {
    let body = vec![0u8, 159, 146, 150, b'\r', b'\n'];
    let mut req = RequestSerializer::new();
    req.set_method(Method::POST).set_url("/upload").set_body(body.clone());

    let out = req.get_result();
    let mut expected = b"POST /upload HTTP/1.1\r\nContent-Length: 6\r\n\r\n".to_vec();
    expected.extend_from_slice(&body);

    assert_eq!(out, expected);
    assert!(out.ends_with(&body));
    assert_eq!(req.headers().get("Content-Length"), Some("6"));
}

#[test]
fn test_request_body_recomputed_on_each_call() {
    let mut req = RequestSerializer::new();
    req.set_body("a longer body").set_body("tiny");

    assert_eq!(req.headers().get("Content-Length"), Some("4"));
    assert_eq!(req.body(), "tiny");
}

#[test]
fn test_request_empty_body_still_declares_length() {
    let mut req = RequestSerializer::new();
    req.set_method(Method::PUT).set_url("/x").set_body("");

    assert_eq!(
        req.get_result(),
        "PUT /x HTTP/1.1\r\nContent-Length: 0\r\n\r\n"
    );
}

#[test]
fn test_request_explicit_content_length_overrides_body() {
    let mut req = RequestSerializer::new();
    req.set_method(Method::POST)
        .set_url("/")
        .set_body("hello")
        .add_head_value("Content-Length", "999");

    assert_eq!(
        req.get_result(),
        "POST / HTTP/1.1\r\nContent-Length: 999\r\n\r\nhello"
    );
}

#[test]
fn test_request_duplicate_header_last_write_wins() {
    let mut req = RequestSerializer::new();
    req.add_head_value("X-Trace", "one")
        .add_head_value("X-Trace", "two");

    let out = req.get_result();
    let text = String::from_utf8_lossy(&out);

    assert_eq!(text.matches("X-Trace").count(), 1);
    assert!(text.contains("X-Trace: two\r\n"));
}

#[test]
fn test_request_host_overwrite() {
    let mut req = RequestSerializer::new();
    req.set_host("first.example").add_head_value("Host", "second.example");

    assert_eq!(req.headers().get("Host"), Some("second.example"));
    assert_eq!(req.headers().len(), 1);
}

#[test]
fn test_request_query_appended() {
    let mut query = QueryParameterBuilder::new();
    query.add("q", "rust").add("lang", "en");

    let mut req = RequestSerializer::new();
    req.set_url("/search").set_query(query.get_result());

    assert_eq!(
        req.get_result(),
        "GET /search?q=rust&lang=en HTTP/1.1\r\n\r\n"
    );
}

#[test]
fn test_request_empty_query_has_no_question_mark() {
    let mut req = RequestSerializer::new();
    req.set_url("/search").set_query("");

    assert_eq!(req.get_result(), "GET /search HTTP/1.1\r\n\r\n");
}

#[test]
fn test_request_url_kept_verbatim() {
    let mut req = RequestSerializer::new();
    req.set_url("/a/../b//c d");

    assert_eq!(req.get_result(), "GET /a/../b//c d HTTP/1.1\r\n\r\n");
}

#[test]
fn test_request_target_with_port_and_query() {
    let target = url::Url::parse("http://example.com:8080/api/v1?x=1&y=2").unwrap();
    let mut req = RequestSerializer::new();
    req.set_target(&target);

    assert_eq!(req.url(), "/api/v1");
    assert_eq!(req.query(), "x=1&y=2");
    assert_eq!(
        req.get_result(),
        "GET /api/v1?x=1&y=2 HTTP/1.1\r\nHost: example.com:8080\r\n\r\n"
    );
}

#[test]
fn test_request_target_default_port_omitted() {
    let target = url::Url::parse("https://example.com:443").unwrap();
    let mut req = RequestSerializer::new();
    req.set_query("stale=1").set_target(&target);

    assert_eq!(req.headers().get("Host"), Some("example.com"));
    assert_eq!(req.url(), "/");
    assert_eq!(req.query(), "");
}

#[test]
fn test_request_get_result_is_repeatable() {
    let mut req = RequestSerializer::new();
    req.set_method(Method::DELETE)
        .set_url("/items/7")
        .set_host("api.local")
        .set_body("{}");

    let first = req.get_result();
    let second = req.get_result();

    assert_eq!(first, second);
}
