//! List item contract shared by every list-like panel.

/// An entry shown in a list panel: a commit, a file, a stash entry, or a
/// branch.
///
/// Items are produced and owned by the data source backing a panel; the
/// navigation layer only reads them. The contract is deliberately closed —
/// exactly an identity and a description, nothing panel-specific.
pub trait HistoryItem {
    /// Stable identity: a hash when the item is a commit, a filename when the
    /// item is a file, `stash@{4}` when it's a stash entry, `my_branch` when
    /// it's a branch.
    fn id(&self) -> String;

    /// Human-readable description, e.g. `123as14: push blah` for a commit.
    fn description(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StashEntry {
        index: usize,
        message: String,
    }

    impl HistoryItem for StashEntry {
        fn id(&self) -> String {
            format!("stash@{{{}}}", self.index)
        }

        fn description(&self) -> String {
            self.message.clone()
        }
    }

    #[test]
    fn test_item_identity_and_description() {
        let entry = StashEntry {
            index: 4,
            message: "WIP on main".to_string(),
        };
        assert_eq!(entry.id(), "stash@{4}");
        assert_eq!(entry.description(), "WIP on main");
    }
}
