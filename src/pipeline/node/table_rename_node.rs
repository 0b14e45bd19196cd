use crate::config::UnmatchedPolicy;
use crate::pipeline::*;

pub struct TableRenameNode {
    table: RenameTable,
    unmatched: UnmatchedPolicy,
    prefix: String,
}

impl TableRenameNode {
    const NAME: &'static str = "TableRenameNode";

    /// Rename contigs found in the table to their new names.
    ///
    /// Contigs missing from the table are kept as they are, numbered `<prefix>_1`, `<prefix>_2`, ...
    /// in their current order, or removed, depending on `unmatched`.
    pub fn new(table: RenameTable, unmatched: UnmatchedPolicy, prefix: impl Into<String>) -> Self {
        Self {
            table,
            unmatched,
            prefix: prefix.into(),
        }
    }
}

impl PipelineNode for TableRenameNode {
    fn run(&self, contigs: Contigs) -> Result<Contigs> {
        let mut res = Contigs::default();
        let mut unmatched = 0;

        for mut contig in contigs {
            if let Some(new_name) = self.table.get(contig.name()) {
                contig.set_name(new_name);
                res.push(contig);
                continue;
            }

            unmatched += 1;

            match self.unmatched {
                UnmatchedPolicy::Keep => res.push(contig),
                UnmatchedPolicy::Sequential => {
                    contig.set_name(format!("{}_{}", self.prefix, unmatched));
                    res.push(contig);
                }
                UnmatchedPolicy::Remove => (),
            }
        }

        if unmatched > 0 {
            log::warn!(
                "{} records not found in the rename table ({:?})",
                unmatched,
                self.unmatched
            );
        }

        Ok(res)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
