//! Generators turning a configured value into a path test.

/// A compiled condition test. Pure, shareable across threads.
pub(crate) type Test = Box<dyn Fn(&str) -> bool + Send + Sync>;

pub(crate) fn equals(what: String) -> Test {
    Box::new(move |path: &str| path == what)
}

pub(crate) fn contains(what: String) -> Test {
    Box::new(move |path: &str| path.contains(what.as_str()))
}

pub(crate) fn contains_all_of(what: Vec<String>) -> Test {
    Box::new(move |path: &str| what.iter().all(|w| path.contains(w.as_str())))
}

pub(crate) fn contains_one_of(what: Vec<String>) -> Test {
    Box::new(move |path: &str| what.iter().any(|w| path.contains(w.as_str())))
}

pub(crate) fn starts_with(what: String) -> Test {
    Box::new(move |path: &str| path.starts_with(what.as_str()))
}

pub(crate) fn ends_with(what: String) -> Test {
    Box::new(move |path: &str| path.ends_with(what.as_str()))
}

pub(crate) fn equals_one_of(what: Vec<String>) -> Test {
    Box::new(move |path: &str| what.iter().any(|w| w == path))
}

/// Wrap a generator so that its tests return the complement.
pub(crate) fn negate<T>(generate: fn(T) -> Test) -> impl Fn(T) -> Test {
    move |what: T| -> Test {
        let test = generate(what);
        Box::new(move |path: &str| !test(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn equals_is_exact() {
        let t = equals("a/b".into());
        assert!(t("a/b"));
        assert!(!t("a/b/"));
        assert!(!t("A/B"));
    }

    #[test]
    fn contains_substring() {
        let t = contains("temp".into());
        assert!(t("/room/temp/1"));
        assert!(!t("/room/hum"));
    }

    #[test]
    fn contains_empty_string_always_matches() {
        assert!(contains(String::new())(""));
        assert!(contains(String::new())("anything"));
    }

    #[test]
    fn contains_all_of_requires_every_element() {
        let t = contains_all_of(list(&["a", "b"]));
        assert!(t("xaxb"));
        assert!(!t("xaxx"));
    }

    #[test]
    fn contains_all_of_empty_is_true() {
        assert!(contains_all_of(vec![])("whatever"));
    }

    #[test]
    fn contains_one_of_requires_any_element() {
        let t = contains_one_of(list(&["a", "b"]));
        assert!(t("xxb"));
        assert!(!t("xxx"));
    }

    #[test]
    fn contains_one_of_empty_is_false() {
        assert!(!contains_one_of(vec![])("whatever"));
    }

    #[test]
    fn starts_and_ends_with() {
        assert!(starts_with("/a".into())("/a/b"));
        assert!(!starts_with("/b".into())("/a/b"));
        assert!(ends_with("/b".into())("/a/b"));
        assert!(!ends_with("/a".into())("/a/b"));
    }

    #[test]
    fn ends_with_longer_than_path_never_matches() {
        assert!(!ends_with("xab".into())("ab"));
        assert!(!ends_with("abc".into())(""));
    }

    #[test]
    fn equals_one_of_matches_members_only() {
        let t = equals_one_of(list(&["x", "y"]));
        assert!(t("y"));
        assert!(!t("xy"));
        assert!(!equals_one_of(vec![])(""));
    }

    #[test]
    fn negate_complements_any_generator() {
        let not_equals = negate(equals);
        let t = not_equals("a".into());
        assert!(!t("a"));
        assert!(t("b"));

        let not_one_of = negate(equals_one_of);
        assert!(not_one_of(vec![])("anything"));
    }
}
