use super::{Evidence, MetadataExtractor};
use crate::model::PackageMetadata;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ROOT_NAMESPACE_CLASS: Regex = Regex::new(r"^(org|com)/.*\.class$").unwrap();
}

/// Last-resort guess from the file name and the class layout.
///
/// The version is whatever follows the final `-` in the path (minus `.jar`);
/// the identity is the leading package segments of the first class under an
/// `org/` or `com/` root. Only used in auto mode.
pub struct OptimisticExtractor;

impl MetadataExtractor for OptimisticExtractor {
    fn name(&self) -> &'static str {
        "optimistic"
    }

    fn attempt(&self, evidence: &Evidence<'_>) -> Option<PackageMetadata> {
        let Evidence::Archive { path, entry_names } = evidence else {
            return None;
        };

        let mut meta = PackageMetadata::default();
        if let Some(version) = version_from_path(&path.to_string_lossy()) {
            meta.set_version(&version);
        }
        if let Some(identity) = entry_names.iter().find_map(|name| identity_from_entry(name)) {
            meta.package_identity = identity;
        }

        meta.is_resolved().then_some(meta)
    }
}

// junit-4.11.jar -> 4.11
fn version_from_path(path: &str) -> Option<String> {
    let tokens: Vec<&str> = path.split('-').collect();
    if tokens.len() < 2 {
        return None;
    }
    tokens.last().map(|last| last.replacen(".jar", "", 1))
}

fn identity_from_entry(entry_name: &str) -> Option<String> {
    if !ROOT_NAMESPACE_CLASS.is_match(entry_name) {
        return None;
    }
    let segments: Vec<&str> = entry_name.split('/').collect();
    let keep = match segments.len() {
        n if n > 3 => 3, // org/example/hello/MyClass.class
        n if n > 2 => 2, // org/example/MyClass.class
        _ => 1,
    };
    Some(segments[..keep].join("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_version_from_path() {
        assert_eq!(version_from_path("junit-4.11.jar").as_deref(), Some("4.11"));
        assert_eq!(
            version_from_path("/userlib/commons-io-2.11.0.jar").as_deref(),
            Some("2.11.0")
        );
        assert_eq!(version_from_path("/userlib/plain.jar"), None);
    }

    #[test]
    fn test_version_uses_path_not_file_name() {
        // A hyphen in a parent directory still splits the path.
        assert_eq!(
            version_from_path("/my-libs/plain.jar").as_deref(),
            Some("libs/plain")
        );
    }

    #[test]
    fn test_identity_segment_truncation() {
        assert_eq!(
            identity_from_entry("org/example/hello/world/MyClass.class").as_deref(),
            Some("org.example.hello")
        );
        assert_eq!(
            identity_from_entry("org/example/hello/MyClass.class").as_deref(),
            Some("org.example.hello")
        );
        assert_eq!(
            identity_from_entry("com/example/MyClass.class").as_deref(),
            Some("com.example")
        );
        assert_eq!(identity_from_entry("org/MyClass.class").as_deref(), Some("org"));
    }

    #[test]
    fn test_identity_requires_root_namespace_class() {
        assert_eq!(identity_from_entry("net/example/MyClass.class"), None);
        assert_eq!(identity_from_entry("org/example/readme.txt"), None);
        assert_eq!(identity_from_entry("META-INF/versions/9/org/a/B.class"), None);
    }

    #[test]
    fn test_attempt_uses_first_matching_class() {
        let entries = names(&[
            "META-INF/MANIFEST.MF",
            "org/junit/",
            "org/junit/runner/JUnitCore.class",
            "junit/framework/Test.class",
        ]);
        let meta = OptimisticExtractor
            .attempt(&Evidence::Archive {
                path: Path::new("/userlib/junit-4.11.jar"),
                entry_names: &entries,
            })
            .unwrap();
        assert_eq!(meta.package_identity, "org.junit.runner");
        assert_eq!(meta.version, "4.11");
        assert_eq!(meta.version_number, 4_011);
    }

    #[test]
    fn test_attempt_without_classes_declines() {
        let entries = names(&["META-INF/MANIFEST.MF", "README.txt"]);
        assert!(OptimisticExtractor
            .attempt(&Evidence::Archive {
                path: Path::new("/userlib/thing-1.0.jar"),
                entry_names: &entries,
            })
            .is_none());
    }
}
