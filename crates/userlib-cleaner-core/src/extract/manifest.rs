use super::{Evidence, MetadataExtractor};
use crate::model::PackageMetadata;

/// Reads `Key: Value` headers from a JAR manifest.
///
/// Later headers in the same category overwrite earlier ones, so with both
/// `Bundle-Name` and `Implementation-Title` present the last one wins.
pub struct ManifestExtractor;

impl MetadataExtractor for ManifestExtractor {
    fn name(&self) -> &'static str {
        "manifest"
    }

    fn attempt(&self, evidence: &Evidence<'_>) -> Option<PackageMetadata> {
        let Evidence::EntryText { text, .. } = evidence else {
            return None;
        };
        let meta = parse_manifest(text);
        meta.is_resolved().then_some(meta)
    }
}

pub(crate) fn parse_manifest(text: &str) -> PackageMetadata {
    let mut meta = PackageMetadata::default();

    for line in text.lines() {
        let mut pair = line.trim().split(": ");
        let (Some(key), Some(value)) = (pair.next(), pair.next()) else {
            continue;
        };

        match key {
            "Bundle-SymbolicName" | "Extension-Name" => {
                meta.package_identity = value.to_string();
            }
            "Bundle-Version" | "Implementation-Version" => meta.set_version(value),
            "Bundle-Vendor" | "Implementation-Vendor" => {
                meta.vendor = Some(value.to_string());
            }
            "Bundle-License" => meta.license = Some(value.to_string()),
            "Bundle-Name" | "Implementation-Title" => {
                meta.display_name = Some(value.to_string());
                meta.package_identity = value.to_string();
            }
            _ => {}
        }
    }

    meta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_osgi_manifest() {
        let text = "Manifest-Version: 1.0\r\n\
                    Bundle-SymbolicName: com.example.lib\r\n\
                    Bundle-Version: 1.4.2\r\n\
                    Bundle-Vendor: Example Corp\r\n\
                    Bundle-License: Apache-2.0\r\n";
        let meta = parse_manifest(text);
        assert_eq!(meta.package_identity, "com.example.lib");
        assert_eq!(meta.version, "1.4.2");
        assert_eq!(meta.version_number, 1_004_002);
        assert_eq!(meta.vendor.as_deref(), Some("Example Corp"));
        assert_eq!(meta.license.as_deref(), Some("Apache-2.0"));
        assert_eq!(meta.display_name, None);
    }

    #[test]
    fn test_last_identity_line_wins() {
        let meta = parse_manifest("Bundle-Name: Foo\nImplementation-Title: Bar\n");
        assert_eq!(meta.package_identity, "Bar");
        assert_eq!(meta.display_name.as_deref(), Some("Bar"));

        let meta = parse_manifest("Implementation-Title: Bar\nBundle-Name: Foo\n");
        assert_eq!(meta.package_identity, "Foo");
    }

    #[test]
    fn test_name_after_symbolic_name_overrides_identity() {
        let meta = parse_manifest(
            "Bundle-SymbolicName: org.acme.util\nBundle-Name: Acme Utilities\n",
        );
        assert_eq!(meta.package_identity, "Acme Utilities");
    }

    #[test]
    fn test_implementation_headers() {
        let meta = parse_manifest(
            "Implementation-Title: junit\nImplementation-Version: 4.11\nImplementation-Vendor: JUnit\n",
        );
        assert_eq!(meta.package_identity, "junit");
        assert_eq!(meta.version_number, 4_011);
        assert_eq!(meta.vendor.as_deref(), Some("JUnit"));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let meta = parse_manifest("Bundle-SymbolicName:no-space\n  \nrandom text\n");
        assert!(!meta.is_resolved());
    }

    #[test]
    fn test_value_stops_at_next_separator() {
        let meta = parse_manifest("Bundle-SymbolicName: a: b\n");
        assert_eq!(meta.package_identity, "a");
    }

    #[test]
    fn test_declines_archive_evidence() {
        let entries: Vec<String> = vec![];
        let evidence = Evidence::Archive {
            path: std::path::Path::new("x.jar"),
            entry_names: &entries,
        };
        assert!(ManifestExtractor.attempt(&evidence).is_none());
    }
}
