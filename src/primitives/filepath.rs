//! Filepath: interned by absolute path, arranged as a parent/child tree
//! mirroring the filesystem so packages (directories) contain modules
//! (files) (§3.1). Entries are never directly destroyed — they live for
//! the process, owned by `Root` like everything else, which is why this is
//! a flat `Arena` plus a reverse lookup rather than anything cascade-delete
//! participates in.

use crate::arena::{Arena, Idx};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

pub type FilepathId = Idx<FilepathNode>;

#[derive(Debug, Clone)]
pub struct FilepathNode {
    pub absolute: PathBuf,
    pub parent: Option<FilepathId>,
    pub children: Vec<FilepathId>,
}

#[derive(Debug, Default)]
pub struct FilepathTable {
    nodes: Arena<FilepathNode>,
    by_path: FxHashMap<PathBuf, FilepathId>,
}

impl FilepathTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `path`, creating any missing ancestor directories along the
    /// way so the tree always mirrors the filesystem from some interned
    /// root down to this entry.
    pub fn intern(&mut self, path: &Path) -> FilepathId {
        if let Some(&existing) = self.by_path.get(path) {
            return existing;
        }

        let parent = path.parent().map(|p| self.intern(p));
        let id = self.nodes.alloc(FilepathNode {
            absolute: path.to_path_buf(),
            parent,
            children: Vec::new(),
        });
        if let Some(parent_id) = parent {
            self.nodes.get_mut(parent_id).children.push(id);
        }
        self.by_path.insert(path.to_path_buf(), id);
        id
    }

    pub fn get(&self, id: FilepathId) -> &FilepathNode {
        self.nodes.get(id)
    }

    pub fn find(&self, path: &Path) -> Option<FilepathId> {
        self.by_path.get(path).copied()
    }

    pub fn children_of(&self, id: FilepathId) -> &[FilepathId] {
        &self.nodes.get(id).children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_a_nested_path_builds_the_ancestor_chain() {
        let mut table = FilepathTable::new();
        let module = table.intern(Path::new("/pkg/sub/mod.rn"));
        let pkg = table.find(Path::new("/pkg")).expect("ancestor interned");
        assert!(table.children_of(pkg).len() >= 1);
        assert_eq!(table.get(module).absolute, PathBuf::from("/pkg/sub/mod.rn"));
    }

    #[test]
    fn interning_the_same_path_twice_returns_the_same_id() {
        let mut table = FilepathTable::new();
        let a = table.intern(Path::new("/pkg/mod.rn"));
        let b = table.intern(Path::new("/pkg/mod.rn"));
        assert_eq!(a, b);
    }
}
