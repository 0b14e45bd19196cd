use crate::pipeline::*;

pub struct SequentialRenameNode {
    prefix: String,
}

impl SequentialRenameNode {
    const NAME: &'static str = "SequentialRenameNode";

    /// Rename contigs in their current order to `<prefix>_1`, `<prefix>_2`, and so on.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl PipelineNode for SequentialRenameNode {
    fn run(&self, mut contigs: Contigs) -> Result<Contigs> {
        for (i, contig) in contigs.iter_mut().enumerate() {
            contig.set_name(format!("{}_{}", self.prefix, i + 1));
        }
        Ok(contigs)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
