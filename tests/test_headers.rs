use wicket::http::headers::Headers;

#[test]
fn test_headers_insert_and_get() {
    let mut headers = Headers::new();
    headers.insert("Host", "example.com");

    assert_eq!(headers.get("Host"), Some("example.com"));
    assert_eq!(headers.get("Missing"), None);
}

#[test]
fn test_headers_lookup_is_exact_match() {
    let mut headers = Headers::new();
    headers.insert("Host", "example.com");

    // Names are stored and looked up as they arrived on the wire
    assert_eq!(headers.get("host"), None);
}

#[test]
fn test_headers_last_write_wins() {
    let mut headers = Headers::new();
    headers.insert("X-Tag", "first");
    headers.insert("X-Tag", "second");

    assert_eq!(headers.get("X-Tag"), Some("second"));
    assert_eq!(headers.len(), 1);
}

#[test]
fn test_headers_iteration_order_is_insertion_order() {
    let mut headers = Headers::new();
    headers.insert("A", "1");
    headers.insert("B", "2");
    headers.insert("C", "3");
    headers.insert("B", "updated");

    let entries: Vec<_> = headers.iter().collect();
    assert_eq!(entries, vec![("A", "1"), ("B", "updated"), ("C", "3")]);
}

#[test]
fn test_headers_empty() {
    let headers = Headers::new();
    assert!(headers.is_empty());
    assert_eq!(headers.len(), 0);
    assert_eq!(headers.iter().count(), 0);
}
