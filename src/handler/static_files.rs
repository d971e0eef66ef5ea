use std::path::{Component, Path, PathBuf};

use crate::config::StaticFilesConfig;
use crate::handler::Handler;
use crate::http::request::Request;
use crate::http::response::{Body, Response, Status};

/// Serves files from a configured root directory.
///
/// Resolution never yields a path outside the root: the URI path is first
/// normalized lexically, then the canonical form of the resolved path is
/// checked against the canonical root. Any miss, including a containment
/// violation, is a plain 404; the chain always continues so a trailing log
/// handler still observes the outcome.
pub struct StaticFilesHandler {
    root: PathBuf,
    index: Vec<String>,
}

impl StaticFilesHandler {
    pub fn new(config: StaticFilesConfig) -> Self {
        Self {
            root: config.root,
            index: config.index,
        }
    }

    /// Maps a request URI to a file under the root.
    ///
    /// - An existing regular file resolves to itself, trailing separator or
    ///   not.
    /// - An existing directory resolves through the index list, but only when
    ///   the request path ends in a separator.
    /// - Everything else, escapes of the root included, is `None`.
    fn resolve(&self, uri: &str) -> Option<PathBuf> {
        let relative = normalize(uri)?;
        let candidate = self.root.join(relative);

        let root = self.root.canonicalize().ok()?;
        let metadata = std::fs::metadata(&candidate).ok()?;

        if metadata.is_dir() {
            if !uri.ends_with('/') {
                return None;
            }
            self.index
                .iter()
                .map(|name| candidate.join(name))
                .find(|path| path.is_file())
                .and_then(|path| contained(&root, &path))
        } else if metadata.is_file() {
            contained(&root, &candidate)
        } else {
            None
        }
    }
}

impl Handler for StaticFilesHandler {
    fn handle(&self, req: &mut Request, res: &mut Response) -> anyhow::Result<bool> {
        match self.resolve(&req.uri) {
            Some(path) => {
                res.status = Status::Ok;
                res.body = Body::File(path);
            }
            None => {
                res.status = Status::NotFound;
                res.body = Body::Empty;
            }
        }
        Ok(true)
    }
}

/// Lexically normalizes a URI path into a relative path: `.` and root
/// separators drop out, `..` pops the previous component. A pop past the top
/// is a traversal attempt and rejects the whole path.
fn normalize(uri: &str) -> Option<PathBuf> {
    let mut out = PathBuf::new();

    for component in Path::new(uri).components() {
        match component {
            Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    return None;
                }
            }
            Component::Normal(part) => out.push(part),
            Component::Prefix(_) => return None,
        }
    }

    Some(out)
}

/// Returns the canonical form of `path` if it is the root or a descendant of
/// it. Canonicalization resolves symlinks, so a link pointing outside the
/// root is rejected here.
fn contained(root: &Path, path: &Path) -> Option<PathBuf> {
    let canonical = path.canonicalize().ok()?;
    canonical.starts_with(root).then_some(canonical)
}
