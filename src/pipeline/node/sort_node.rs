use crate::pipeline::*;

pub struct SortLenNode {
    descending: bool,
}

impl SortLenNode {
    const NAME: &'static str = "SortLenNode";

    /// Order contigs by length. Contigs of equal length keep their relative order.
    pub fn new(descending: bool) -> Self {
        Self { descending }
    }
}

impl PipelineNode for SortLenNode {
    fn run(&self, mut contigs: Contigs) -> Result<Contigs> {
        if self.descending {
            contigs.sort_by_len_desc();
        } else {
            contigs.sort_by_len();
        }
        Ok(contigs)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
