//! Locations inside a SARIF document, and translation between wire keys and
//! internal field names.

use std::fmt;

use sarifkit_model::{EntityKind, JsonValue, WireField};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Ordered key/index steps from the document root. Empty means the root itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push_key(&mut self, key: impl Into<String>) {
        self.0.push(PathSegment::Key(key.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.0.push(PathSegment::Index(index));
    }

    /// Builder form of [`FieldPath::push_key`].
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.push_key(key);
        self
    }

    /// Builder form of [`FieldPath::push_index`].
    pub fn index(mut self, index: usize) -> Self {
        self.push_index(index);
        self
    }

    pub(crate) fn from_serde(path: &serde_path_to_error::Path) -> Self {
        let mut out = Self::root();
        for segment in path.iter() {
            match segment {
                serde_path_to_error::Segment::Seq { index } => out.push_index(*index),
                serde_path_to_error::Segment::Map { key } => out.push_key(key.clone()),
                // Enum variant names and opaque steps do not address anything in the JSON.
                _ => {}
            }
        }
        out
    }

    /// The JSON value this path addresses, if it exists.
    pub fn lookup<'a>(&self, root: &'a JsonValue) -> Option<&'a JsonValue> {
        self.0.iter().try_fold(root, |value, segment| match segment {
            PathSegment::Key(key) => value.get(key.as_str()),
            PathSegment::Index(index) => value.get(*index),
        })
    }

    /// Walk a wire-keyed path through the alias tables starting at `root`.
    ///
    /// Keys that do not belong to a known entity (free-form property bags,
    /// mappings) are kept as-is and stop entity tracking.
    pub(crate) fn resolve(&self, root: EntityKind) -> Resolved {
        let mut current = Some(root);
        let mut resolved = Resolved {
            field_path: FieldPath::root(),
            owner: None,
            leaf: None,
        };

        for segment in &self.0 {
            match segment {
                PathSegment::Index(index) => resolved.field_path.push_index(*index),
                PathSegment::Key(key) => {
                    let hit = current.and_then(|entity| {
                        entity.field_by_wire(key).map(|field| (entity, field))
                    });
                    match hit {
                        Some((entity, field)) => {
                            resolved.field_path.push_key(field.field);
                            resolved.owner = Some(entity);
                            resolved.leaf = Some(field);
                            current = field.kind.entity();
                        }
                        None => {
                            resolved.field_path.push_key(key.clone());
                            current = None;
                        }
                    }
                }
            }
        }
        resolved
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Result of walking a path through the alias tables.
#[derive(Clone, Debug)]
pub(crate) struct Resolved {
    /// The same path spelled with internal field names.
    pub field_path: FieldPath,
    /// Entity owning the last recognised field.
    pub owner: Option<EntityKind>,
    /// Last recognised field.
    pub leaf: Option<&'static WireField>,
}
