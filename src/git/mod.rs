//! Git integration layer for gitcc
//!
//! Wraps a git2 repository: opening it, resolving revisions, walking history
//! and merge-base lookups. Commits are converted to the validation
//! [`Commit`] type so nothing past this module depends on git2.

use anyhow::{Context, Result};
use git2::{ErrorCode, Oid, Repository, Sort};
use std::path::Path;

use crate::history::CommitSource;
use crate::validation::Commit;

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::open(path)
            .with_context(|| format!("'{}' is not a git repository", path.display()))?;
        Ok(Self { repo })
    }

    /// Path of the `.git` directory
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    pub fn hooks_dir(&self) -> std::path::PathBuf {
        self.git_dir().join("hooks")
    }

    /// Working tree root, if the repository is not bare
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Full hash of the commit `rev` points to
    pub fn resolve_commit(&self, rev: &str) -> Result<String> {
        Ok(self.resolve_oid(rev)?.to_string())
    }

    /// The commit `HEAD` points to
    pub fn head_commit(&self) -> Result<Commit> {
        let oid = self.resolve_oid("HEAD")?;
        self.load_commit(oid)
    }

    fn resolve_oid(&self, rev: &str) -> Result<Oid> {
        let commit = self
            .repo
            .revparse_single(rev)
            .and_then(|object| object.peel_to_commit())
            .with_context(|| format!("Failed to resolve '{rev}' to a commit"))?;
        Ok(commit.id())
    }

    fn load_commit(&self, oid: Oid) -> Result<Commit> {
        let commit = self
            .repo
            .find_commit(oid)
            .with_context(|| format!("Failed to read commit {oid}"))?;
        let bytes = commit.message_bytes();
        let message = match std::str::from_utf8(bytes) {
            Ok(message) => message.to_string(),
            Err(_) => {
                tracing::warn!("Commit {oid} has a non UTF-8 message");
                String::from_utf8_lossy(bytes).into_owned()
            }
        };
        Ok(Commit::new(oid.to_string(), message))
    }
}

impl CommitSource for GitRepo {
    fn commits<'a>(
        &'a self,
        start: &str,
    ) -> Result<Box<dyn Iterator<Item = Result<Commit>> + 'a>> {
        let start_oid = self.resolve_oid(start)?;
        let mut revwalk = self.repo.revwalk().context("Failed to walk history")?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(start_oid)?;

        Ok(Box::new(revwalk.map(move |oid| {
            let oid = oid.context("Failed to walk history")?;
            self.load_commit(oid)
        })))
    }

    fn merge_bases(&self, one: &str, two: &str) -> Result<Vec<String>> {
        let one = self.resolve_oid(one)?;
        let two = self.resolve_oid(two)?;
        match self.repo.merge_bases(one, two) {
            Ok(bases) => Ok(bases.iter().map(Oid::to_string).collect()),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(Vec::new()),
            Err(e) => Err(e).context("Failed to find a merge base"),
        }
    }
}
