use colored::Colorize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Parent,
    Child,
    Sibling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

// =============================================================================
// Milestone 1: High-level code welded to the storage layout
// =============================================================================

/// Low-level storage: a flat list of (from, relation, to) records.
#[derive(Default)]
pub struct RelationshipStore {
    records: Vec<(Person, Relation, Person)>,
}

impl RelationshipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the relationship in both directions.
    pub fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        self.records
            .push((parent.clone(), Relation::Parent, child.clone()));
        self.records
            .push((child.clone(), Relation::Child, parent.clone()));
    }

    pub fn records(&self) -> &[(Person, Relation, Person)] {
        &self.records
    }
}

/// Research that digs through the raw records. Any change to the storage
/// layout breaks this code.
pub struct DirectResearch;

impl DirectResearch {
    pub fn children_of(store: &RelationshipStore, parent_name: &str) -> Vec<Person> {
        store
            .records()
            .iter()
            .filter(|(from, relation, _)| from.name == parent_name && *relation == Relation::Parent)
            .map(|(_, _, to)| to.clone())
            .collect()
    }
}

// =============================================================================
// Milestone 2: Depend on the question, not the storage
// =============================================================================

/// The abstraction both sides depend on: high-level research asks it
/// questions, low-level storage answers them.
pub trait RelationshipBrowser {
    fn find_all_children_of(&self, name: &str) -> Vec<Person>;
}

impl RelationshipBrowser for RelationshipStore {
    fn find_all_children_of(&self, name: &str) -> Vec<Person> {
        self.records
            .iter()
            .filter(|(from, relation, _)| from.name == name && *relation == Relation::Parent)
            .map(|(_, _, to)| to.clone())
            .collect()
    }
}

/// High-level module. It never sees a record tuple.
pub struct Research {
    pub findings: Vec<String>,
}

impl Research {
    pub fn new(browser: &dyn RelationshipBrowser, parent_name: &str) -> Self {
        let findings = browser
            .find_all_children_of(parent_name)
            .into_iter()
            .map(|child| format!("{parent_name} has a child named {}", child.name))
            .collect();
        Self { findings }
    }
}

// =============================================================================
// Milestone 3: Swap the storage, keep the research
// =============================================================================

/// A different storage layout entirely. High-level code does not notice.
#[derive(Default)]
pub struct IndexedBrowser {
    children_by_parent: HashMap<String, Vec<Person>>,
}

impl IndexedBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        self.children_by_parent
            .entry(parent.name.clone())
            .or_default()
            .push(child.clone());
    }
}

impl RelationshipBrowser for IndexedBrowser {
    fn find_all_children_of(&self, name: &str) -> Vec<Person> {
        self.children_by_parent
            .get(name)
            .cloned()
            .unwrap_or_default()
    }
}

fn main() {
    let john = Person::new("John");
    let chris = Person::new("Chris");
    let matt = Person::new("Matt");

    let mut store = RelationshipStore::new();
    store.add_parent_and_child(&john, &chris);
    store.add_parent_and_child(&john, &matt);

    println!("{}", "=== Research welded to the record layout ===".bold());
    for child in DirectResearch::children_of(&store, "John") {
        println!("John has a child named {}", child.name);
    }

    println!("\n{}", "=== Research through the browser trait ===".bold());
    let research = Research::new(&store, "John");
    for finding in &research.findings {
        println!("{finding}");
    }

    println!("\n{}", "=== Same research, different storage ===".bold());
    let mut indexed = IndexedBrowser::new();
    indexed.add_parent_and_child(&john, &chris);
    indexed.add_parent_and_child(&john, &matt);
    let research = Research::new(&indexed, "John");
    for finding in &research.findings {
        println!("{} {finding}", "[indexed]".green());
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn family_store() -> RelationshipStore {
        let mut store = RelationshipStore::new();
        store.add_parent_and_child(&Person::new("John"), &Person::new("Chris"));
        store.add_parent_and_child(&Person::new("John"), &Person::new("Matt"));
        store
    }

    #[test]
    fn both_directions_are_recorded() {
        let mut store = RelationshipStore::new();
        store.add_parent_and_child(&Person::new("John"), &Person::new("Chris"));
        assert_eq!(store.records().len(), 2);
        assert!(store
            .records()
            .iter()
            .any(|(from, relation, to)| from.name == "Chris"
                && *relation == Relation::Child
                && to.name == "John"));
    }

    #[test]
    fn browser_finds_all_children() {
        let store = family_store();
        let children = store.find_all_children_of("John");
        let names: Vec<&str> = children.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Chris", "Matt"]);
    }

    #[test]
    fn unknown_parent_has_no_children() {
        let store = family_store();
        assert!(store.find_all_children_of("Nobody").is_empty());
    }

    #[test]
    fn direct_and_inverted_research_agree() {
        let store = family_store();
        let direct = DirectResearch::children_of(&store, "John");
        let inverted = store.find_all_children_of("John");
        assert_eq!(direct, inverted);
    }

    #[test]
    fn research_reads_the_same_through_either_storage() {
        let store = family_store();

        let mut indexed = IndexedBrowser::new();
        indexed.add_parent_and_child(&Person::new("John"), &Person::new("Chris"));
        indexed.add_parent_and_child(&Person::new("John"), &Person::new("Matt"));

        let from_store = Research::new(&store, "John");
        let from_index = Research::new(&indexed, "John");
        assert_eq!(from_store.findings, from_index.findings);
        assert_eq!(
            from_store.findings,
            vec![
                "John has a child named Chris",
                "John has a child named Matt",
            ]
        );
    }
}
