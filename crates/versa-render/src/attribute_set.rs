//! Ordered, name-keyed attribute collections
use versa_core::AttributeDefinition;

/// Attributes of one view, in declaration order.
///
/// Names are unique. Re-inserting a name replaces the definition in its
/// original slot, so render order does not change on redeclaration.
pub struct AttributeSet<R> {
    attributes: Vec<AttributeDefinition<R>>,
}

impl<R> AttributeSet<R> {
    pub fn new() -> Self {
        Self {
            attributes: Vec::new(),
        }
    }

    /// Insert or replace by name, returning the stored definition and
    /// whether an earlier one was replaced.
    pub fn upsert(&mut self, attribute: AttributeDefinition<R>) -> (&AttributeDefinition<R>, bool) {
        let (index, replaced) = match self.position(attribute.name()) {
            Some(index) => {
                self.attributes[index] = attribute;
                (index, true)
            }
            None => {
                self.attributes.push(attribute);
                (self.attributes.len() - 1, false)
            }
        };
        (&self.attributes[index], replaced)
    }

    pub fn get(&self, name: &str) -> Option<&AttributeDefinition<R>> {
        self.position(name).map(|index| &self.attributes[index])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttributeDefinition<R>> {
        self.attributes.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name() == name)
    }
}

impl<R> Default for AttributeSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for AttributeSet<R> {
    fn clone(&self) -> Self {
        Self {
            attributes: self.attributes.clone(),
        }
    }
}

impl<R> std::fmt::Debug for AttributeSet<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.attributes.iter()).finish()
    }
}

impl<'a, R> IntoIterator for &'a AttributeSet<R> {
    type Item = &'a AttributeDefinition<R>;
    type IntoIter = std::slice::Iter<'a, AttributeDefinition<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
