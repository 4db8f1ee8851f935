//! Resource descriptors reported by the server.

use serde::Deserialize;

/// Resource kind: file or folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    File,
    Folder,
}

/// Server-reported metadata for one path in the remote hierarchy.
///
/// A read-only snapshot: always fetched fresh, never cached client-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    /// Resource name (last path segment).
    pub name: String,
    /// Absolute remote path.
    pub path: String,
    /// Size in bytes (0 for folders on some server versions).
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub is_dir: bool,
    /// Server-side content-type label ("blob", "text", ...); empty for folders.
    #[serde(default, rename = "type")]
    pub kind_label: String,
    /// Last-modified timestamp as reported by the server (RFC 3339).
    #[serde(default)]
    pub modified: String,
    #[serde(default)]
    pub extension: String,
    /// Children, populated when this descriptor is a folder listing.
    #[serde(default)]
    pub items: Vec<ResourceDescriptor>,
}

impl ResourceDescriptor {
    /// Kind of this resource.
    pub fn kind(&self) -> ResourceKind {
        if self.is_dir {
            ResourceKind::Folder
        } else {
            ResourceKind::File
        }
    }

    /// Check if this resource is a file.
    pub fn is_file(&self) -> bool {
        !self.is_dir
    }

    /// Check if this resource is a folder.
    pub fn is_folder(&self) -> bool {
        self.is_dir
    }
}
