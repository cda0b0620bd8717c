use h1wire::http::query::QueryParameterBuilder;

#[test]
fn test_query_joins_pairs_in_order() {
    let mut query = QueryParameterBuilder::new();
    query.add("a", "1").add("b", "2");

    assert_eq!(query.get_result(), "a=1&b=2");
}

#[test]
fn test_query_empty_by_default() {
    let query = QueryParameterBuilder::new();

    assert!(query.is_empty());
    assert_eq!(query.get_result(), "");
}

#[test]
fn test_query_single_pair_has_no_separator() {
    let mut query = QueryParameterBuilder::new();
    query.add("only", "one");

    assert_eq!(query.get_result(), "only=one");
    assert!(!query.is_empty());
}

#[test]
fn test_query_no_escaping() {
    let mut query = QueryParameterBuilder::new();
    query.add("q", "a b&c=d").add("x", "%20");

    assert_eq!(query.get_result(), "q=a b&c=d&x=%20");
}

#[test]
fn test_query_empty_key_and_value_kept() {
    let mut query = QueryParameterBuilder::new();
    query.add("", "").add("k", "").add("", "v");

    assert_eq!(query.get_result(), "=&k=&=v");
}

#[test]
fn test_query_duplicate_keys_are_appended() {
    let mut query = QueryParameterBuilder::new();
    query.add("tag", "a").add("tag", "b");

    assert_eq!(query.get_result(), "tag=a&tag=b");
}

#[test]
fn test_query_get_result_does_not_reset() {
    let mut query = QueryParameterBuilder::new();
    query.add("a", "1");

    assert_eq!(query.get_result(), "a=1");
    assert_eq!(query.get_result(), "a=1");

    query.add("b", "2");
    assert_eq!(query.get_result(), "a=1&b=2");
}
