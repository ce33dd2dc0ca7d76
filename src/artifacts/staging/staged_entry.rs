use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::staging::ARTIFACT_SEPARATOR;
use derive_new::new;

/// A file sitting in the staging directory
///
/// `path` is the file's path relative to the repository root, with `/`
/// separators, or its absolute path when it lives outside the root.
/// Ordering follows the artifact name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct StagedEntry {
    oid: ObjectId,
    path: String,
}

impl StagedEntry {
    /// Parse a staging directory entry name of the form `<digest>_<escaped path>`
    ///
    /// Returns `None` for anything that was not written by staging.
    pub fn parse_artifact_name(name: &str) -> Option<Self> {
        let (digest, escaped) = name.split_once(ARTIFACT_SEPARATOR)?;
        let path = unescape_path(escaped)?;
        if path.is_empty() {
            return None;
        }

        let oid = ObjectId::try_parse(digest).ok()?;
        Some(StagedEntry::new(oid, path))
    }

    pub fn artifact_name(&self) -> String {
        format!(
            "{}{}{}",
            self.oid,
            ARTIFACT_SEPARATOR,
            escape_path(&self.path)
        )
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Ord for StagedEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // digests have a fixed length, so comparing the parts in turn matches
        // comparing the artifact names
        self.oid
            .cmp(&other.oid)
            .then_with(|| escape_path(&self.path).cmp(&escape_path(&other.path)))
    }
}

impl PartialOrd for StagedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Fold a path into a single file name component
fn escape_path(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            '/' => escaped.push_str("%2F"),
            c => escaped.push(c),
        }
    }

    escaped
}

/// Inverse of `escape_path`; any other `%` sequence is rejected
fn unescape_path(escaped: &str) -> Option<String> {
    let mut path = String::with_capacity(escaped.len());
    let mut rest = escaped;

    while let Some(index) = rest.find('%') {
        path.push_str(&rest[..index]);
        match rest.get(index..index + 3)? {
            "%25" => path.push('%'),
            "%2F" => path.push('/'),
            _ => return None,
        }
        rest = &rest[index + 3..];
    }
    path.push_str(rest);

    Some(path)
}

impl std::fmt::Display for StagedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.artifact_name())
    }
}
