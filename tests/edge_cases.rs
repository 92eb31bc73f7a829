use pathmatch::{compile, lowercase, ConditionKind, Config, PathConfig, PathMatcher};

fn matcher(path: PathConfig) -> PathMatcher {
    compile(&Config::new(path)).unwrap()
}

#[test]
fn absent_path_section_yields_no_matcher() {
    assert!(compile(&Config::without_path()).is_none());
    assert!(compile(&Config::default()).is_none());
}

#[test]
fn empty_path_section_matches_everything() {
    let m = matcher(PathConfig::new());
    assert!(m.matches(""));
    assert!(m.matches("/a"));
    assert!(m.matches_lowered("X", "x"));
}

#[test]
fn case_insensitive_empty_section_matches_everything() {
    let m = matcher(PathConfig::new().case_insensitive(true));
    assert!(m.is_case_insensitive());
    assert!(m.matches("ANYTHING"));
}

#[test]
fn empty_lists() {
    assert!(matcher(PathConfig::new().contains_all_of(Vec::<String>::new())).matches("x"));
    assert!(!matcher(PathConfig::new().contains_one_of(Vec::<String>::new())).matches("x"));
    assert!(!matcher(PathConfig::new().equals_one_of(Vec::<String>::new())).matches("x"));
    assert!(matcher(PathConfig::new().equals_not_one_of(Vec::<String>::new())).matches("x"));
}

#[test]
fn empty_string_values() {
    assert!(matcher(PathConfig::new().equals("")).matches(""));
    assert!(!matcher(PathConfig::new().equals("")).matches("a"));
    assert!(matcher(PathConfig::new().starts_with("")).matches("abc"));
    assert!(matcher(PathConfig::new().ends_with("")).matches("abc"));
    assert!(!matcher(PathConfig::new().contains_not("")).matches("abc"));
}

#[test]
fn ends_with_value_longer_than_path() {
    let m = matcher(PathConfig::new().ends_with("/abc"));
    assert!(!m.matches("bc"));
    assert!(!m.matches(""));
    let n = matcher(PathConfig::new().ends_not_with("/abc"));
    assert!(n.matches("bc"));
}

#[test]
fn case_insensitive_starts_with() {
    let m = matcher(PathConfig::new().case_insensitive(true).starts_with("Foo"));
    assert!(m.matches_lowered("FOOBAR", "foobar"));
    assert!(!m.matches_lowered("barfoo", "barfoo"));
}

#[test]
fn composite_contains_ends_with() {
    let m = matcher(PathConfig::new().contains("a").ends_with("z"));
    assert!(m.matches("az"));
    assert!(!m.matches("za"));
    assert!(!m.matches("bz"));
}

#[test]
fn equals_evaluated_before_ends_with() {
    let m = matcher(PathConfig::new().ends_with("x").equals("y"));
    assert_eq!(
        m.conditions(),
        vec![ConditionKind::Equals, ConditionKind::EndsWith]
    );
    let report = m.evaluate_detailed("x");
    assert_eq!(report.rejected_by(), Some(ConditionKind::Equals));
    assert_eq!(report.evaluated(), &[ConditionKind::Equals]);
}

#[test]
fn all_twelve_conditions_together() {
    let m = matcher(
        PathConfig::new()
            .equals_not("/x")
            .contains("dev")
            .contains_not("tmp")
            .contains_all_of(["/", "ice"])
            .contains_one_of(["temp", "hum"])
            .starts_with("/dev")
            .starts_not_with("/devx")
            .ends_with("/1")
            .ends_not_with("/0")
            .equals_one_of(["/devices/temp/1", "/devices/hum/1"])
            .equals_not_one_of(["/devices/hum/1"]),
    );
    assert_eq!(m.len(), 11);
    assert!(m.matches("/devices/temp/1"));
    assert!(!m.matches("/devices/hum/1"));

    let report = m.evaluate_detailed("/devices/hum/1");
    assert_eq!(report.rejected_by(), Some(ConditionKind::EqualsNotOneOf));
    assert_eq!(report.evaluated().len(), 11);
}

#[test]
fn idempotent_compilation() {
    let config = Config::new(PathConfig::new().starts_with("/a").contains_one_of(["b", "c"]));
    let first = compile(&config).unwrap();
    let second = compile(&config).unwrap();
    for path in ["/a/b", "/a/c", "/a/d", "/b", ""] {
        assert_eq!(first.matches(path), second.matches(path), "path {path}");
    }
}

#[test]
fn unicode_lowercase() {
    let m = matcher(PathConfig::new().case_insensitive(true).equals("/Straße/ÄRGER"));
    assert!(m.matches("/straße/Ärger"));
    assert_eq!(lowercase("/STRASSE"), "/strasse");
    // lowercase only, no folding of ß to ss
    assert!(!m.matches("/STRASSE/ärger"));
}

#[test]
fn matches_lowered_is_ignored_when_case_sensitive() {
    let m = matcher(PathConfig::new().equals("Foo"));
    assert!(m.matches_lowered("Foo", "foo"));
    assert!(!m.matches_lowered("foo", "Foo"));
}

#[test]
fn multibyte_paths() {
    let m = matcher(PathConfig::new().starts_with("ü").ends_with("😀"));
    assert!(m.matches("über/😀"));
    assert!(!m.matches("uber/😀"));
}
