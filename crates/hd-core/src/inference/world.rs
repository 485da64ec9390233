//! A single complete assignment of genotypes and trait statuses.

use std::collections::BTreeSet;

use hd_common::{GeneCount, PersonId};

/// Set of individuals, borrowed from a pedigree.
pub type PersonSet<'a> = BTreeSet<&'a PersonId>;

/// One world: who carries one copy, who carries two, and who shows the trait.
///
/// Anyone in neither gene set carries zero copies; anyone outside
/// `have_trait` does not show the trait. If someone is in both gene sets the
/// two-copy set wins.
#[derive(Debug, Clone, Copy)]
pub struct World<'a> {
    pub one_gene: &'a PersonSet<'a>,
    pub two_genes: &'a PersonSet<'a>,
    pub have_trait: &'a PersonSet<'a>,
}

impl<'a> World<'a> {
    pub fn new(
        one_gene: &'a PersonSet<'a>,
        two_genes: &'a PersonSet<'a>,
        have_trait: &'a PersonSet<'a>,
    ) -> Self {
        Self {
            one_gene,
            two_genes,
            have_trait,
        }
    }

    pub fn genes(&self, id: &PersonId) -> GeneCount {
        if self.two_genes.contains(id) {
            GeneCount::Two
        } else if self.one_gene.contains(id) {
            GeneCount::One
        } else {
            GeneCount::Zero
        }
    }

    pub fn has_trait(&self, id: &PersonId) -> bool {
        self.have_trait.contains(id)
    }
}
