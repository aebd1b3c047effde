//! The Specification pattern: named, reusable predicates over items.
//!
//! [`filter`] never changes when a new criterion appears; a criterion is one
//! new [`Specification`] impl. This is what keeps the open/closed example
//! (`complete_02_open_closed`) open for extension.

/// A predicate over a single item.
///
/// Implementations capture their criteria at construction and hold no other
/// state. `is_satisfied` is a pure function of the item and that criteria.
pub trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;
}

/// Any closure over `&T` is a specification.
impl<T, F> Specification<T> for F
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self(item)
    }
}

/// Logical conjunction of child specifications.
///
/// Children are evaluated in the order they were added and evaluation stops
/// at the first unsatisfied child. A composite with no children is vacuously
/// satisfied.
pub struct AndSpecification<T> {
    children: Vec<Box<dyn Specification<T>>>,
}

impl<T> AndSpecification<T> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Appends a child, keeping construction order.
    pub fn with(mut self, spec: impl Specification<T> + 'static) -> Self {
        self.children.push(Box::new(spec));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T> Default for AndSpecification<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Specification<T> for AndSpecification<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.children.iter().all(|child| child.is_satisfied(item))
    }
}

/// Builds the conjunction of an ordered list of specifications.
pub fn all_of<T>(children: Vec<Box<dyn Specification<T>>>) -> AndSpecification<T> {
    AndSpecification { children }
}

/// Returns the items satisfying `spec`, in their original order.
///
/// The input is only borrowed; neither the items nor the specification are
/// touched beyond reading.
pub fn filter<'a, T>(items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T> {
    items.iter().filter(|item| spec.is_satisfied(item)).collect()
}

// =============================================================================
// Tests
// =============================================================================
