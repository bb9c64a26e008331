//! The relation-graph file format (§6.4, `.dd`): one `relationship` per
//! line, consumed unchanged by the object-layout generator that lays out
//! the concrete typed arenas. The binder never reads this format directly —
//! it builds `Relation` entities straight from the surface grammar — but
//! emitting a `.dd` snapshot after binding is how the object-layout stage
//! downstream gets a stable, diffable view of the relation schema.
//!
//! Grammar: `relationship Parent[:Label] Child[:Label] <kind> [cascade]`

use crate::hir::relation_entity::{Relation, TransformerKind};
use crate::hir::root::Root;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationFileEntry {
    pub parent: String,
    pub parent_label: Option<String>,
    pub child: String,
    pub child_label: Option<String>,
    pub kind: TransformerKind,
    pub cascade: bool,
}

impl fmt::Display for RelationFileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "relationship {}", self.parent)?;
        if let Some(label) = &self.parent_label {
            write!(f, ":{label}")?;
        }
        write!(f, " {}", self.child)?;
        if let Some(label) = &self.child_label {
            write!(f, ":{label}")?;
        }
        write!(f, " {}", kind_keyword(self.kind))?;
        if self.cascade {
            write!(f, " cascade")?;
        }
        Ok(())
    }
}

fn kind_keyword(kind: TransformerKind) -> &'static str {
    match kind {
        TransformerKind::LinkedList => "linked_list",
        TransformerKind::TailLinked => "tail_linked",
        TransformerKind::DoublyLinked => "doubly_linked",
        TransformerKind::Array => "array",
        TransformerKind::Hashed => "hashed",
        TransformerKind::HashedClass => "hashed_class",
        TransformerKind::OneToOne => "one_to_one",
        TransformerKind::Heapq => "heapq",
    }
}

fn kind_from_keyword(word: &str) -> Result<TransformerKind, String> {
    Ok(match word {
        "linked_list" => TransformerKind::LinkedList,
        "tail_linked" => TransformerKind::TailLinked,
        "doubly_linked" => TransformerKind::DoublyLinked,
        "array" => TransformerKind::Array,
        "hashed" => TransformerKind::Hashed,
        "hashed_class" => TransformerKind::HashedClass,
        "one_to_one" => TransformerKind::OneToOne,
        "heapq" => TransformerKind::Heapq,
        other => return Err(format!("unknown relation transformer kind `{other}`")),
    })
}

fn split_name_label(token: &str) -> (String, Option<String>) {
    match token.split_once(':') {
        Some((name, label)) => (name.to_string(), Some(label.to_string())),
        None => (token.to_string(), None),
    }
}

/// Parses one non-blank, non-comment line of a `.dd` file.
pub fn parse_line(line: &str) -> Result<RelationFileEntry, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["relationship", parent, child, kind] => {
            let (parent, parent_label) = split_name_label(parent);
            let (child, child_label) = split_name_label(child);
            Ok(RelationFileEntry {
                parent,
                parent_label,
                child,
                child_label,
                kind: kind_from_keyword(kind)?,
                cascade: false,
            })
        }
        ["relationship", parent, child, kind, "cascade"] => {
            let (parent, parent_label) = split_name_label(parent);
            let (child, child_label) = split_name_label(child);
            Ok(RelationFileEntry {
                parent,
                parent_label,
                child,
                child_label,
                kind: kind_from_keyword(kind)?,
                cascade: true,
            })
        }
        [] => Err("empty relation file line".to_string()),
        _ => Err(format!("malformed relationship line: `{line}`")),
    }
}

/// Parses an entire `.dd` file, skipping blank lines and `#`-comments.
pub fn parse(contents: &str) -> Result<Vec<RelationFileEntry>, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_line)
        .collect()
}

/// Renders the bound relation graph back to `.dd` text.
pub fn render(root: &Root) -> String {
    let mut out = String::new();
    for (_, relation) in root.relations.iter() {
        let entry = entry_for(root, relation);
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}

/// Templates carry no direct name pointer in the HIR (the declared name
/// lives on an Ident in the enclosing scope, §3.1); the `.dd` renderer
/// falls back to a stable arena-index name, which is sufficient for the
/// object-layout generator since it only needs a unique key per Template.
fn entry_for(root: &Root, relation: &Relation) -> RelationFileEntry {
    RelationFileEntry {
        parent: format!("Template{}", relation.parent.raw()),
        parent_label: relation.parent_role.map(|s| root.strings.resolve(s).to_string()),
        child: format!("Template{}", relation.child.raw()),
        child_label: relation.child_role.map(|s| root.strings.resolve(s).to_string()),
        kind: relation.transformer,
        cascade: relation.cascade_delete,
    }
}
