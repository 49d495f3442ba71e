use snatch_core::hostname_label;

#[test]
fn takes_second_level_domain() {
    assert_eq!(hostname_label("www.example.com").as_deref(), Some("example"));
    assert_eq!(hostname_label("docs.rs.example.org").as_deref(), Some("example"));
}

#[test]
fn two_part_host_yields_its_name() {
    assert_eq!(hostname_label("example.com").as_deref(), Some("example"));
}

#[test]
fn single_label_host_has_no_label() {
    assert_eq!(hostname_label("localhost"), None);
    assert_eq!(hostname_label(""), None);
}

#[test]
fn empty_second_level_is_not_found() {
    assert_eq!(hostname_label(".com"), None);
}

#[test]
fn label_is_lowercased() {
    assert_eq!(hostname_label("News.YCombinator.COM").as_deref(), Some("ycombinator"));
}

#[test]
fn ip_addresses_are_split_like_any_host() {
    // Dotted IPv4 hosts are not special-cased.
    assert_eq!(hostname_label("127.0.0.1").as_deref(), Some("0"));
}
