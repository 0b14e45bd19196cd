use memchr::memmem::Finder;

use crate::contig::*;
use crate::pipeline::*;

pub struct DropUnplacedNode {
    finders: Vec<Finder<'static>>,
}

impl DropUnplacedNode {
    const NAME: &'static str = "DropUnplacedNode";

    /// Drop every contig whose name contains any of the keywords (case-sensitive substring).
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            finders: keywords
                .iter()
                .map(|k| Finder::new(k.as_ref().as_bytes()).into_owned())
                .collect(),
        }
    }

    pub fn is_unplaced(&self, contig: &Contig) -> bool {
        let name = contig.name().as_bytes();
        self.finders.iter().any(|f| f.find(name).is_some())
    }
}

impl PipelineNode for DropUnplacedNode {
    fn run(&self, mut contigs: Contigs) -> Result<Contigs> {
        contigs.retain(|c| !self.is_unplaced(c));
        Ok(contigs)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn node() -> DropUnplacedNode {
        DropUnplacedNode::new(&crate::config::UNPLACED_KEYWORDS)
    }

    #[test]
    fn substring_case_sensitive() {
        let node = node();
        assert!(node.is_unplaced(&Contig::new("chrUn_unplaced_1", "")));
        assert!(node.is_unplaced(&Contig::new("xunanchorx", "")));
        assert!(node.is_unplaced(&Contig::new("unscaffolded", "")));
        assert!(!node.is_unplaced(&Contig::new("chr1_Unplaced", "")));
        assert!(!node.is_unplaced(&Contig::new("UNANCHORED", "")));
        assert!(!node.is_unplaced(&Contig::new("chr2", "")));
    }

    #[test]
    fn keeps_order_of_survivors() {
        let input: Contigs = ["a", "b_unplaced", "c", "d_unanchored", "e"]
            .iter()
            .map(|&n| Contig::new(n, "A"))
            .collect();
        let output = node().run(input).unwrap();
        let names = output.iter().map(|c| c.name()).collect::<Vec<_>>();
        assert_eq!(names, ["a", "c", "e"]);
    }

    proptest! {
        #[test]
        fn prop_no_unplaced_survives(names in prop::collection::vec("[a-z_]{0,16}", 0..30)) {
            let input: Contigs = names.iter().map(|n| Contig::new(n.as_str(), "A")).collect();
            let output = node().run(input).unwrap();
            for c in output.iter() {
                prop_assert!(!crate::config::UNPLACED_KEYWORDS.iter().any(|k| c.name().contains(k)));
            }
        }
    }
}
