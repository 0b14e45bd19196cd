use std::cmp::Reverse;
use std::fmt;
use std::ops::Index;

use crate::contig::*;
use crate::errors::*;

/// Ordered collection of contigs.
///
/// Order matters: it is the input order after parsing, and the size rank after sorting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contigs {
    contigs: Vec<Contig>,
    species: Option<String>,
}

impl Contigs {
    pub fn new(contigs: Vec<Contig>) -> Self {
        Self {
            contigs,
            species: None,
        }
    }

    /// Attach a free-form species label. It is metadata only and never emitted as FASTA.
    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn species(&self) -> Option<&str> {
        self.species.as_deref()
    }

    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }

    pub fn push(&mut self, contig: Contig) {
        self.contigs.push(contig);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contig> {
        self.contigs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Contig> {
        self.contigs.iter_mut()
    }

    /// Keep only the contigs where the predicate holds, preserving order.
    pub fn retain<F: FnMut(&Contig) -> bool>(&mut self, pred: F) {
        self.contigs.retain(pred);
    }

    /// Stable sort, longest first.
    pub fn sort_by_len_desc(&mut self) {
        self.contigs.sort_by_cached_key(|c| Reverse(c.len()));
    }

    /// Stable sort, shortest first.
    pub fn sort_by_len(&mut self) {
        self.contigs.sort_by_cached_key(|c| c.len());
    }

    /// Total number of sequence characters over all contigs.
    pub fn total_len(&self) -> usize {
        self.contigs.iter().map(|c| c.len()).sum()
    }

    pub fn into_vec(self) -> Vec<Contig> {
        self.contigs
    }

    pub fn to_yaml(&self) -> Result<String> {
        let records = self
            .contigs
            .iter()
            .map(|c| c.to_structured())
            .collect::<Vec<_>>();
        Ok(serde_yaml::to_string(&records)?)
    }
}

impl Index<usize> for Contigs {
    type Output = Contig;

    fn index(&self, idx: usize) -> &Contig {
        &self.contigs[idx]
    }
}

impl FromIterator<Contig> for Contigs {
    fn from_iter<I: IntoIterator<Item = Contig>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Contigs {
    type Item = Contig;
    type IntoIter = std::vec::IntoIter<Contig>;

    fn into_iter(self) -> Self::IntoIter {
        self.contigs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Contigs {
    type Item = &'a Contig;
    type IntoIter = std::slice::Iter<'a, Contig>;

    fn into_iter(self) -> Self::IntoIter {
        self.contigs.iter()
    }
}

impl fmt::Display for Contigs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.species {
            Some(species) => writeln!(f, "Fasta species: {}", species)?,
            None => writeln!(f, "Fasta species: None")?,
        }
        write!(f, "Fasta length: {}.", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sort_desc_is_stable() {
        let mut contigs: Contigs = [("a", "AA"), ("b", "CCCC"), ("c", "GG"), ("d", "TTTT")]
            .into_iter()
            .map(|(n, s)| Contig::new(n, s))
            .collect();
        contigs.sort_by_len_desc();
        let names = contigs.iter().map(|c| c.name()).collect::<Vec<_>>();
        assert_eq!(names, ["b", "d", "a", "c"]);

        contigs.sort_by_len();
        let names = contigs.iter().map(|c| c.name()).collect::<Vec<_>>();
        assert_eq!(names, ["a", "c", "b", "d"]);
    }

    #[test]
    fn fresh_collections_do_not_share_storage() {
        let mut a = Contigs::default();
        let b = Contigs::default();
        a.push(Contig::new("x", "A"));
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn summary_and_yaml() {
        let contigs = Contigs::new(vec![Contig::new("a", "ACG")]).with_species("Gallus gallus");
        assert_eq!(contigs.to_string(), "Fasta species: Gallus gallus\nFasta length: 1.");
        assert_eq!(contigs.to_yaml().unwrap(), "- name: a\n  seq: ACG\n  length: 3\n");
        assert_eq!(contigs.total_len(), 3);
    }

    proptest! {
        #[test]
        fn prop_sort_desc_keeps_ties_in_input_order(lens in prop::collection::vec(0usize..6, 0..40)) {
            let mut contigs: Contigs = lens
                .iter()
                .enumerate()
                .map(|(i, &l)| Contig::new(i.to_string(), "A".repeat(l)))
                .collect();
            contigs.sort_by_len_desc();

            for w in contigs.into_vec().windows(2) {
                prop_assert!(w[0].len() >= w[1].len());
                if w[0].len() == w[1].len() {
                    let i: usize = w[0].name().parse().unwrap();
                    let j: usize = w[1].name().parse().unwrap();
                    prop_assert!(i < j);
                }
            }
        }
    }
}
