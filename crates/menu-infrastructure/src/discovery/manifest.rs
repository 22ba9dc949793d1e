// ============================================================================
// Menu Infrastructure - Manifest Discovery
// File: crates/menu-infrastructure/src/discovery/manifest.rs
// Description: Menu declarations read from a TOML or JSON manifest file
// ============================================================================
//! Manifest shape (TOML):
//!
//! ```toml
//! [[item]]
//! id = "docs::Guide"
//! route = "/docs/guide"
//! label = "Guide"
//! parent = "pages::Index"   # optional
//! ```
//!
//! JSON manifests are a bare array of entries, `[{ "id": ..., ... }]`, or
//! the TOML shape spelled as an object, `{"item": [...]}`.

use std::path::{Path, PathBuf};

use menu_core::{ComponentId, DomainError, MenuDeclaration, MenuDiscovery};
use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use crate::error::InfraError;

#[derive(Debug, Deserialize, Default)]
struct ManifestFile {
    #[serde(default)]
    item: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonManifest {
    Items(Vec<ManifestEntry>),
    Wrapped(ManifestFile),
}

impl From<JsonManifest> for ManifestFile {
    fn from(doc: JsonManifest) -> Self {
        match doc {
            JsonManifest::Items(item) => ManifestFile { item },
            JsonManifest::Wrapped(file) => file,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
struct ManifestEntry {
    #[validate(length(min = 1, message = "Menu id must not be empty"))]
    id: String,

    #[validate(length(min = 1, max = 255, message = "Menu route must be between 1 and 255 characters"))]
    route: String,

    #[validate(length(min = 1, max = 100, message = "Menu label must be between 1 and 100 characters"))]
    label: String,

    parent: Option<String>,
}

impl ManifestEntry {
    fn into_declaration(self) -> Result<MenuDeclaration, InfraError> {
        // Validate what will actually be stored.
        let entry = Self {
            id: self.id.trim().to_string(),
            route: self.route.trim().to_string(),
            label: self.label.trim().to_string(),
            parent: self
                .parent
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        };
        entry.validate().map_err(|source| InfraError::InvalidEntry {
            id: entry.id.clone(),
            source,
        })?;
        Ok(MenuDeclaration::new(
            entry.route,
            entry.label,
            ComponentId::from(entry.id),
            entry.parent.map(ComponentId::from),
        ))
    }
}

/// Declarations loaded once from a manifest file; discovery returns that snapshot.
#[derive(Debug, Clone, Default)]
pub struct ManifestDiscovery {
    path: Option<PathBuf>,
    declarations: Vec<MenuDeclaration>,
}

impl ManifestDiscovery {
    /// Load `path`. The format follows the extension (`.toml` or `.json`).
    /// A missing file is an error only when `required` is set.
    pub fn load(path: impl AsRef<Path>, required: bool) -> Result<Self, InfraError> {
        let path = path.as_ref();

        if !path.exists() {
            if required {
                return Err(InfraError::ManifestNotFound(path.to_path_buf()));
            }
            warn!("Menu manifest {} not found; continuing without it", path.display());
            return Ok(Self {
                path: Some(path.to_path_buf()),
                declarations: Vec::new(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| InfraError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        let mut manifest = match extension.as_str() {
            "toml" => Self::from_toml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            other => return Err(InfraError::UnsupportedFormat(other.to_string())),
        };
        manifest.path = Some(path.to_path_buf());

        info!(
            "Loaded {} menu declarations from {}",
            manifest.declarations.len(),
            path.display()
        );
        Ok(manifest)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, InfraError> {
        let file: ManifestFile = toml::from_str(content)?;
        Self::from_manifest(file)
    }

    pub fn from_json_str(content: &str) -> Result<Self, InfraError> {
        let doc: JsonManifest = serde_json::from_str(content)?;
        Self::from_manifest(doc.into())
    }

    fn from_manifest(file: ManifestFile) -> Result<Self, InfraError> {
        let declarations = file
            .item
            .into_iter()
            .map(ManifestEntry::into_declaration)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            path: None,
            declarations,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn declarations(&self) -> &[MenuDeclaration] {
        &self.declarations
    }
}

impl MenuDiscovery for ManifestDiscovery {
    fn discover(&self) -> Result<Vec<MenuDeclaration>, DomainError> {
        Ok(self.declarations.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOML_MANIFEST: &str = r#"
[[item]]
id = "pages::Docs"
route = "/docs"
label = "Docs"

[[item]]
id = "pages::Guide"
route = " /docs/guide "
label = "Guide"
parent = "pages::Docs"
"#;

    #[test]
    fn test_toml_manifest() {
        let manifest = ManifestDiscovery::from_toml_str(TOML_MANIFEST).unwrap();
        let decls = manifest.discover().unwrap();

        assert_eq!(decls.len(), 2);
        assert!(decls[0].is_root());
        assert_eq!(decls[1].route, "/docs/guide");
        assert_eq!(decls[1].parent_id, Some(ComponentId::from("pages::Docs")));
    }

    #[test]
    fn test_json_manifest() {
        let manifest = ManifestDiscovery::from_json_str(
            r#"{"item":[{"id":"pages::Faq","route":"/faq","label":"FAQ","parent":"pages::Index"}]}"#,
        )
        .unwrap();

        assert_eq!(manifest.declarations()[0].label, "FAQ");
    }

    #[test]
    fn test_json_array_manifest() {
        let manifest = ManifestDiscovery::from_json_str(
            r#"[
                {"id":"pages::Faq","route":"/faq","label":"FAQ"},
                {"id":"pages::FaqBilling","route":"/faq/billing","label":"Billing","parent":"pages::Faq"}
            ]"#,
        )
        .unwrap();
        let decls = manifest.declarations();

        assert_eq!(decls.len(), 2);
        assert!(decls[0].is_root());
        assert_eq!(decls[1].parent_id, Some(ComponentId::from("pages::Faq")));
    }

    #[test]
    fn test_json_manifest_of_wrong_shape() {
        let err = ManifestDiscovery::from_json_str(r#""pages::Faq""#).unwrap_err();

        assert!(matches!(err, InfraError::Json(_)));
    }

    #[test]
    fn test_blank_route_and_label_rejected() {
        let err = ManifestDiscovery::from_toml_str(
            "[[item]]\nid = \" pages::Blank \"\nroute = \"   \"\nlabel = \"   \"\n",
        )
        .unwrap_err();

        let InfraError::InvalidEntry { id, source } = err else {
            panic!("expected InvalidEntry, got {err:?}");
        };
        assert_eq!(id, "pages::Blank");
        let fields = source.field_errors();
        assert!(fields.contains_key("route"));
        assert!(fields.contains_key("label"));
    }

    #[test]
    fn test_blank_parent_is_root() {
        let manifest = ManifestDiscovery::from_toml_str(
            "[[item]]\nid = \"pages::Top\"\nroute = \"/top\"\nlabel = \"Top\"\nparent = \" \"\n",
        )
        .unwrap();

        assert!(manifest.declarations()[0].is_root());
    }

    #[test]
    fn test_empty_label_rejected() {
        let err = ManifestDiscovery::from_toml_str(
            "[[item]]\nid = \"pages::Blank\"\nroute = \"/blank\"\nlabel = \"\"\n",
        )
        .unwrap_err();

        assert!(matches!(err, InfraError::InvalidEntry { ref id, .. } if id == "pages::Blank"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.toml");
        std::fs::write(&path, TOML_MANIFEST).unwrap();

        let manifest = ManifestDiscovery::load(&path, true).unwrap();

        assert_eq!(manifest.path(), Some(path.as_path()));
        assert_eq!(manifest.declarations().len(), 2);
    }

    #[test]
    fn test_missing_optional_manifest_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = ManifestDiscovery::load(dir.path().join("absent.toml"), false).unwrap();

        assert!(manifest.discover().unwrap().is_empty());
    }

    #[test]
    fn test_missing_required_manifest_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = ManifestDiscovery::load(dir.path().join("absent.toml"), true).unwrap_err();

        assert!(matches!(err, InfraError::ManifestNotFound(_)));
        assert!(matches!(DomainError::from(err), DomainError::Discovery(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.yaml");
        std::fs::write(&path, "item: []").unwrap();

        let err = ManifestDiscovery::load(&path, true).unwrap_err();
        assert!(matches!(err, InfraError::UnsupportedFormat(ref ext) if ext == "yaml"));
    }
}
