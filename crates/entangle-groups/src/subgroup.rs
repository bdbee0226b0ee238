//! Subgroups of GL(2, Z/mZ) held as explicit element sets.
//!
//! A subgroup is built either by closing a generating set or by wrapping
//! an element list that is already known to be closed, such as a kernel.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::GroupError;
use crate::gl2::Gl2;
use crate::matrix::ModMatrix;

/// A subgroup of an ambient GL(2, Z/mZ), with every element enumerated.
#[derive(Clone, Debug)]
pub struct Subgroup {
    ambient: Gl2,
    /// Elements in discovery order.
    elements: Vec<ModMatrix>,
    /// The same elements, for membership tests.
    lookup: FxHashSet<ModMatrix>,
}

impl Subgroup {
    /// The trivial subgroup {1}.
    #[must_use]
    pub fn trivial(ambient: Gl2) -> Self {
        Self::from_elements(vec![ambient.identity()], ambient)
    }

    /// The whole ambient group, by enumeration.
    #[must_use]
    pub fn full(ambient: Gl2) -> Self {
        Self::from_elements(ambient.elements().collect(), ambient)
    }

    /// Computes the smallest subgroup containing `generators`.
    ///
    /// Generators are added one at a time. A generator already in the
    /// current subgroup is skipped; otherwise the element set is extended
    /// by right multiplication with the kept generators until it stops
    /// growing. In a finite group this also yields every inverse.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::ModulusMismatch`] or
    /// [`GroupError::NotInvertible`] for a generator outside `ambient`.
    pub fn from_generators<'a, I>(generators: I, ambient: Gl2) -> Result<Self, GroupError>
    where
        I: IntoIterator<Item = &'a ModMatrix>,
    {
        let mut group = Self::trivial(ambient);
        let mut kept: Vec<ModMatrix> = Vec::new();

        for g in generators {
            ambient.check(g)?;
            if group.lookup.contains(g) {
                continue;
            }
            kept.push(*g);

            // Products of old elements with old generators are already
            // present, so the first round only needs the new generator.
            let mut frontier: Vec<ModMatrix> = group
                .elements
                .iter()
                .map(|x| x.mm(g))
                .filter(|y| group.lookup.insert(*y))
                .collect();
            group.elements.extend_from_slice(&frontier);

            while !frontier.is_empty() {
                let mut next = Vec::new();
                for x in &frontier {
                    for s in &kept {
                        let y = x.mm(s);
                        if group.lookup.insert(y) {
                            next.push(y);
                        }
                    }
                }
                group.elements.extend_from_slice(&next);
                frontier = next;
            }

            debug!(
                modulus = ambient.modulus().get(),
                generators = kept.len(),
                order = group.elements.len(),
                "closure grew"
            );
        }

        Ok(group)
    }

    /// Wraps an element list that is already closed under multiplication.
    ///
    /// No closure is computed; duplicates are dropped. Passing a list that
    /// is not a subgroup leaves every later result meaningless.
    #[must_use]
    pub fn from_elements(elements: Vec<ModMatrix>, ambient: Gl2) -> Self {
        debug_assert!(elements.iter().all(|x| ambient.contains(x)));
        let mut lookup = FxHashSet::default();
        lookup.reserve(elements.len());
        let elements = elements.into_iter().filter(|x| lookup.insert(*x)).collect();
        Self {
            ambient,
            elements,
            lookup,
        }
    }

    /// The ambient group.
    #[must_use]
    pub const fn ambient(&self) -> Gl2 {
        self.ambient
    }

    /// The number of elements.
    #[must_use]
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, x: &ModMatrix) -> bool {
        self.lookup.contains(x)
    }

    /// The elements, in discovery order.
    #[must_use]
    pub fn elements(&self) -> &[ModMatrix] {
        &self.elements
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, ModMatrix> {
        self.elements.iter()
    }

    /// The elements of `other` that also lie in this subgroup.
    #[must_use]
    pub fn intersect(&self, other: &Subgroup) -> Vec<ModMatrix> {
        other.iter().filter(|x| self.contains(x)).copied().collect()
    }

    /// Returns true if every element lies in `other`.
    #[must_use]
    pub fn is_subgroup_of(&self, other: &Subgroup) -> bool {
        self.ambient == other.ambient && self.iter().all(|x| other.contains(x))
    }

    /// The index [other : self], if this is a subgroup of `other`.
    #[must_use]
    pub fn index_in(&self, other: &Subgroup) -> Option<usize> {
        if !self.is_subgroup_of(other) || other.order() % self.order() != 0 {
            return None;
        }
        Some(other.order() / self.order())
    }
}

impl<'a> IntoIterator for &'a Subgroup {
    type Item = &'a ModMatrix;
    type IntoIter = std::slice::Iter<'a, ModMatrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
