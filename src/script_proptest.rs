//! Property-based tests for the command sequence builder.
//!
//! The append-order and tagging contracts of [`Commands`] are what every
//! phase leans on, so they get property coverage beyond the unit tests.

use crate::script::Commands;
use proptest::prelude::*;

fn fragment() -> impl Strategy<Value = String> {
    // Printable fragments without newlines, like real shell one-liners.
    "[ -~]{1,40}"
}

proptest! {
    #[test]
    fn prop_add_preserves_order(fragments in prop::collection::vec(fragment(), 0..20)) {
        let mut cmds = Commands::new();
        for f in &fragments {
            cmds = cmds.add(f.as_str());
        }

        let collected: Vec<_> = cmds.iter().map(|c| c.cmd.clone()).collect();
        prop_assert_eq!(collected, fragments);
    }

    #[test]
    fn prop_add_all_concatenates(
        left in prop::collection::vec(fragment(), 0..10),
        right in prop::collection::vec(fragment(), 0..10),
    ) {
        let mut a = Commands::new();
        for f in &left {
            a = a.add(f.as_str());
        }
        let mut b = Commands::new();
        for f in &right {
            b = b.add(f.as_str());
        }

        let joined = a.add_all(b);
        let mut expected = left.clone();
        expected.extend(right.iter().cloned());

        let collected: Vec<_> = joined.iter().map(|c| c.cmd.clone()).collect();
        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn prop_with_tags_keeps_order_and_tags_everything(
        fragments in prop::collection::vec(fragment(), 0..10),
        tag in "[a-z]{1,8}",
    ) {
        let mut cmds = Commands::new();
        for f in &fragments {
            cmds = cmds.add(f.as_str());
        }
        let tagged = cmds.with_tags([tag.as_str()]);

        prop_assert_eq!(tagged.len(), fragments.len());
        for (command, fragment) in tagged.iter().zip(&fragments) {
            prop_assert_eq!(&command.cmd, fragment);
            prop_assert!(command.has_tag(&tag));
        }
    }

    #[test]
    fn prop_with_tags_idempotent(
        fragments in prop::collection::vec(fragment(), 0..10),
        tag in "[a-z]{1,8}",
    ) {
        let mut cmds = Commands::new();
        for f in &fragments {
            cmds = cmds.add(f.as_str());
        }
        let once = cmds.with_tags([tag.as_str()]);
        let twice = once.clone().with_tags([tag.as_str()]);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_to_script_line_count(fragments in prop::collection::vec(fragment(), 1..20)) {
        let mut cmds = Commands::new();
        for f in &fragments {
            cmds = cmds.add(f.as_str());
        }
        prop_assert_eq!(cmds.to_script().lines().count(), fragments.len());
    }
}
