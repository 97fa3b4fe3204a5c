//! Identifier assignment and parent lookup.
//!
//! Every pseudo component gets a fresh UUID up front so that parent
//! references can be resolved to generated identifiers in a single pass,
//! regardless of declaration order.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::{Result, TranslateError};
use crate::pseudo::PseudoComponent;

/// A component paired with the identifier minted for it.
#[derive(Debug, Clone, Copy)]
pub struct IndexEntry<'a> {
    pub generated_id: Uuid,
    pub original: &'a PseudoComponent,
}

/// Map from authored identifier to the component and its generated UUID.
#[derive(Debug)]
pub struct ComponentIndex<'a> {
    entries: HashMap<&'a str, IndexEntry<'a>>,
}

impl<'a> ComponentIndex<'a> {
    /// Indexes a component collection, minting one UUID per component.
    /// Authored identifiers must be unique; a repeat aborts the build.
    pub fn build(components: &'a [PseudoComponent]) -> Result<Self> {
        let mut entries = HashMap::with_capacity(components.len());
        for component in components {
            let entry = IndexEntry {
                generated_id: Uuid::new_v4(),
                original: component,
            };
            if entries.insert(component.id.as_str(), entry).is_some() {
                return Err(TranslateError::DuplicateId(component.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<IndexEntry<'a>> {
        self.entries.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pseudo::PseudoKind;

    fn component(id: &str) -> PseudoComponent {
        PseudoComponent {
            id: id.to_string(),
            kind: PseudoKind::Section,
            parent: None,
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            text: None,
            content: None,
            align: None,
            scale: None,
            background_image: false,
            style: None,
        }
    }

    #[test]
    fn assigns_distinct_ids() {
        let components = vec![component("a"), component("b")];
        let index = ComponentIndex::build(&components).unwrap();
        assert_eq!(index.len(), 2);
        let a = index.get("a").unwrap();
        let b = index.get("b").unwrap();
        assert_ne!(a.generated_id, b.generated_id);
        assert_eq!(a.original.id, "a");
    }

    #[test]
    fn missing_ids_are_not_found() {
        let components = vec![component("a")];
        let index = ComponentIndex::build(&components).unwrap();
        assert!(index.get("b").is_none());
    }

    #[test]
    fn duplicate_ids_abort_the_build() {
        let components = vec![component("a"), component("a")];
        match ComponentIndex::build(&components) {
            Err(TranslateError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn empty_collection_builds_an_empty_index() {
        let index = ComponentIndex::build(&[]).unwrap();
        assert!(index.is_empty());
    }
}
