/// One row of the inventory, produced once per visited filesystem node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub name: String,
    pub path: String,
    pub kind: String,
    pub size: String,
    pub created: String,
}
