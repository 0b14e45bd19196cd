use rustc_hash::FxHashSet;

use crate::pipeline::*;

pub struct RevCompNode {
    names: FxHashSet<String>,
}

impl RevCompNode {
    const NAME: &'static str = "RevCompNode";

    /// Reverse complement the contigs with the given names, matched before any renaming.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            names: names.iter().map(|n| n.as_ref().to_owned()).collect(),
        }
    }
}

impl PipelineNode for RevCompNode {
    fn run(&self, mut contigs: Contigs) -> Result<Contigs> {
        contigs
            .iter_mut()
            .filter(|c| self.names.contains(c.name()))
            .for_each(|c| c.revcomp());
        Ok(contigs)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contig::*;

    #[test]
    fn only_named_contigs_flipped() {
        let input: Contigs = [("a", "AACG"), ("b", "AACG")]
            .iter()
            .map(|&(n, s)| Contig::new(n, s))
            .collect();
        let output = RevCompNode::new(&["b"]).run(input).unwrap();
        assert_eq!(output[0].seq(), "AACG");
        assert_eq!(output[1].seq(), "CGTT");
        assert_eq!(output[1].len(), 4);
    }
}
