use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The feed's version manifest: the list of currently known Photon
/// release branches, in publication order.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionManifest {
    pub branches: Vec<String>,
}

/// One vulnerability entry for a specific Photon release.
///
/// Only the identifier and the package name are interpreted by the
/// pipeline. Everything else the feed publishes (score, affected and
/// resolved versions, ...) is carried through `extra` untouched and
/// written back out verbatim.
///
/// `os_version` is never present on the wire; the record splitter injects
/// it before the record is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,

    #[serde(default)]
    pub cve_id: String,

    // Older feed snapshots published the package name as "pkgname".
    #[serde(default, alias = "pkgname")]
    pub pkg: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
