use super::{Evidence, MetadataExtractor};
use crate::model::PackageMetadata;

/// Reads Maven's `pom.properties` (`groupId`, `artifactId`, `version`).
pub struct PomPropertiesExtractor;

impl MetadataExtractor for PomPropertiesExtractor {
    fn name(&self) -> &'static str {
        "pom.properties"
    }

    fn attempt(&self, evidence: &Evidence<'_>) -> Option<PackageMetadata> {
        let Evidence::EntryText { text, .. } = evidence else {
            return None;
        };
        let meta = parse_pom_properties(text);
        meta.is_resolved().then_some(meta)
    }
}

pub(crate) fn parse_pom_properties(text: &str) -> PackageMetadata {
    let mut meta = PackageMetadata::default();
    let mut group_id = "";
    let mut artifact_id = "";

    for line in text.lines() {
        let mut pair = line.trim().split('=');
        let (Some(key), Some(value)) = (pair.next(), pair.next()) else {
            continue;
        };

        match key {
            "groupId" => group_id = value,
            "artifactId" => artifact_id = value,
            "version" => meta.set_version(value),
            _ => {}
        }
    }

    if !group_id.is_empty() && !artifact_id.is_empty() {
        meta.package_identity = format!("{}.{}", group_id, artifact_id);
    }
    meta
}
