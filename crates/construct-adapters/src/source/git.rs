//! Git-backed template source.
//!
//! A remote reference is cloned into a per-user cache on first use. Later
//! uses fetch `origin`, force-checkout the tip of the tracked branch and
//! detach HEAD there, discarding anything changed locally in the cache.
//!
//! Two processes resolving the same reference at the same time race on the
//! cache directory; nothing here locks it.

use std::path::{Path, PathBuf};

use construct_core::{
    application::{ApplicationError, ports::VersionedSource},
    domain::{ResolvedSource, TemplateReference},
    error::ConstructResult,
};
use git2::{BranchType, Repository, build::CheckoutBuilder, build::RepoBuilder};
use tracing::{debug, info, instrument};
use url::Url;

const REMOTE: &str = "origin";
const FALLBACK_BRANCHES: [&str; 2] = ["main", "master"];

/// [`VersionedSource`] over git via libgit2.
#[derive(Debug, Clone)]
pub struct GitSource {
    cache_dir: PathBuf,
    branch: Option<String>,
}

impl GitSource {
    /// Create a source caching clones under `cache_dir`.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            branch: None,
        }
    }

    /// Track `branch` instead of the remote's default branch.
    #[must_use]
    pub fn with_branch(mut self, branch: Option<String>) -> Self {
        self.branch = branch.filter(|b| !b.is_empty());
        self
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Cache location for `url`: `<cache_dir>/<host><path>`.
    ///
    /// Dot segments are refused so the result always stays inside the
    /// cache directory.
    pub fn cache_path_for(&self, url: &Url) -> Result<PathBuf, String> {
        let mut path = self.cache_dir.clone();

        match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => path.push(format!("{host}_{port}")),
            (Some(host), None) => path.push(host),
            _ => {}
        }

        let mut pushed = false;
        for segment in url.path_segments().into_iter().flatten() {
            match segment {
                "" => continue,
                "." | ".." => return Err(format!("URL path contains '{segment}'")),
                s if s.contains('\\') => return Err(format!("URL path segment '{s}' contains '\\'")),
                s => {
                    path.push(s);
                    pushed = true;
                }
            }
        }

        if !pushed {
            return Err("URL has no repository path".into());
        }
        Ok(path)
    }

    fn clone_into(&self, reference: &TemplateReference, path: &Path) -> ConstructResult<()> {
        info!(url = %reference, path = %path.display(), "Cloning template");

        let unavailable = |reason: String| ApplicationError::SourceUnavailable {
            reference: reference.to_string(),
            reason,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                unavailable(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let mut builder = RepoBuilder::new();
        if let Some(branch) = &self.branch {
            builder.branch(branch);
        }
        let repo = builder
            .clone(reference.as_str(), path)
            .map_err(|e| unavailable(e.message().to_string()))?;

        if let Ok(head) = repo.head() {
            debug!(commit = ?head.target(), "Cloned");
        }
        Ok(())
    }

    fn update(&self, path: &Path) -> ConstructResult<()> {
        info!(path = %path.display(), "Updating cached template");

        let sync_failed = |step: &str, e: git2::Error| ApplicationError::SourceSyncFailed {
            path: path.to_path_buf(),
            reason: format!("{}: {}", step, e.message()),
        };

        let repo = Repository::open(path).map_err(|e| sync_failed("open", e))?;

        let mut remote = repo
            .find_remote(REMOTE)
            .map_err(|e| sync_failed("find remote", e))?;
        remote
            .fetch(&[] as &[&str], None, None)
            .map_err(|e| sync_failed("fetch", e))?;

        let branch_name = self.tracked_branch(&repo);
        let branch = repo
            .find_branch(&format!("{REMOTE}/{branch_name}"), BranchType::Remote)
            .map_err(|e| sync_failed("find branch", e))?;
        let oid = branch.get().target().ok_or_else(|| ApplicationError::SourceSyncFailed {
            path: path.to_path_buf(),
            reason: format!("{REMOTE}/{branch_name} has no target commit"),
        })?;
        let commit = repo
            .find_commit(oid)
            .map_err(|e| sync_failed("find commit", e))?;

        let mut checkout = CheckoutBuilder::new();
        checkout.force().remove_untracked(true).remove_ignored(true);
        repo.checkout_tree(commit.as_object(), Some(&mut checkout))
            .map_err(|e| sync_failed("checkout", e))?;
        repo.set_head_detached(oid)
            .map_err(|e| sync_failed("detach HEAD", e))?;

        debug!(commit = %oid, branch = %branch_name, "Checked out");
        Ok(())
    }

    /// Configured branch, else the remote's HEAD, else `main`, else `master`.
    fn tracked_branch(&self, repo: &Repository) -> String {
        if let Some(branch) = &self.branch {
            return branch.clone();
        }

        let remote_head = format!("refs/remotes/{REMOTE}/HEAD");
        let prefix = format!("refs/remotes/{REMOTE}/");
        if let Some(name) = repo
            .find_reference(&remote_head)
            .ok()
            .and_then(|r| r.symbolic_target().map(str::to_string))
            .and_then(|t| t.strip_prefix(&prefix).map(str::to_string))
        {
            return name;
        }

        FALLBACK_BRANCHES
            .iter()
            .find(|b| {
                repo.find_branch(&format!("{REMOTE}/{b}"), BranchType::Remote)
                    .is_ok()
            })
            .unwrap_or(&FALLBACK_BRANCHES[1])
            .to_string()
    }
}

impl VersionedSource for GitSource {
    #[instrument(skip_all, fields(reference = %reference))]
    fn resolve(&self, reference: &TemplateReference) -> ConstructResult<ResolvedSource> {
        let local = Path::new(reference.as_str());
        if local.exists() {
            debug!("Using local template directory");
            return Ok(ResolvedSource::new(reference.clone(), local));
        }

        let unavailable = |reason: String| ApplicationError::SourceUnavailable {
            reference: reference.to_string(),
            reason,
        };

        let url = Url::parse(reference.as_str())
            .map_err(|e| unavailable(format!("not an existing path or a valid URL: {e}")))?;
        let path = self.cache_path_for(&url).map_err(unavailable)?;

        if path.exists() {
            self.update(&path)?;
        } else {
            self.clone_into(reference, &path)?;
        }

        Ok(ResolvedSource::new(reference.clone(), path))
    }
}
