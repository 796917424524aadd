//! Ordered, tag-annotated shell fragment sequences.
//!
//! Phases express their output as a [`Commands`] sequence: an append-only
//! builder over [`Command`] values, where insertion order is the execution
//! order contract. Tags record which operating-system family (or category) a
//! fragment belongs to, so the final artifact can be filtered or audited
//! downstream without re-parsing shell text.
//!
//! The builder is passed by value: every append consumes and returns the
//! sequence, so no shared mutable sequence can leak between phases.

use serde::Serialize;
use std::collections::BTreeSet;

/// A single shell fragment plus the set of tags annotating it.
///
/// The fragment is POSIX-sh compatible text; it is never parsed or executed
/// here. Fragments that must not abort the overall provisioning run carry
/// their own `|| true` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    /// The literal shell fragment.
    pub cmd: String,
    /// Tags annotating the fragment (OS family, category).
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

impl Command {
    /// Create an untagged command from a literal fragment.
    pub fn new<S: Into<String>>(cmd: S) -> Self {
        Self {
            cmd: cmd.into(),
            tags: BTreeSet::new(),
        }
    }

    /// Whether this command carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// An ordered, append-only sequence of [`Command`]s.
///
/// Insertion order == execution order. All append operations take the
/// sequence by value and hand it back, allowing fluent chains:
///
/// ```
/// use imageprep::script::Commands;
///
/// let cmds = Commands::new()
///     .add("apt-get -y clean")
///     .add("rm -rf /var/lib/apt/lists/* || true")
///     .with_tags(["debian"]);
///
/// assert_eq!(cmds.len(), 2);
/// assert!(cmds.get_commands()[0].has_tag("debian"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Commands {
    commands: Vec<Command>,
}

impl Commands {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one literal shell fragment.
    pub fn add<S: Into<String>>(mut self, fragment: S) -> Self {
        self.commands.push(Command::new(fragment));
        self
    }

    /// Append an already-constructed command, keeping its tags.
    pub fn add_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// Append every command from another sequence, preserving relative order
    /// and tags.
    pub fn add_all(mut self, other: Commands) -> Self {
        self.commands.extend(other.commands);
        self
    }

    /// Annotate every contained command with the given tags.
    ///
    /// Order is untouched; tags accumulate as a set, so re-tagging with an
    /// already-present tag is a no-op.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: BTreeSet<String> = tags.into_iter().map(Into::into).collect();
        for command in &mut self.commands {
            command.tags.extend(tags.iter().cloned());
        }
        self
    }

    /// Read-only snapshot of the final ordered sequence.
    pub fn get_commands(&self) -> &[Command] {
        &self.commands
    }

    /// Consume the sequence, yielding the ordered commands.
    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    /// Number of commands in the sequence.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over the commands in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    /// The commands carrying the given tag, in order.
    pub fn tagged(&self, tag: &str) -> Vec<&Command> {
        self.commands.iter().filter(|c| c.has_tag(tag)).collect()
    }

    /// Render the sequence as a newline-joined script body.
    ///
    /// No header or trailer is added here; that is the orchestrator's job.
    pub fn to_script(&self) -> String {
        self.commands
            .iter()
            .map(|c| c.cmd.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl IntoIterator for Commands {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl FromIterator<Command> for Commands {
    fn from_iter<T: IntoIterator<Item = Command>>(iter: T) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order() {
        let cmds = Commands::new().add("first").add("second").add("third");
        let fragments: Vec<_> = cmds.iter().map(|c| c.cmd.as_str()).collect();
        assert_eq!(fragments, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_add_all_preserves_order_and_tags() {
        let tagged = Commands::new().add("rm -rf /var/cache/apk/* || true").with_tags(["alpine"]);
        let cmds = Commands::new().add("echo start").add_all(tagged).add("echo end");

        assert_eq!(cmds.len(), 3);
        assert_eq!(cmds.get_commands()[1].cmd, "rm -rf /var/cache/apk/* || true");
        assert!(cmds.get_commands()[1].has_tag("alpine"));
        assert!(!cmds.get_commands()[0].has_tag("alpine"));
        assert!(!cmds.get_commands()[2].has_tag("alpine"));
    }

    #[test]
    fn test_with_tags_annotates_every_command() {
        let cmds = Commands::new().add("a").add("b").with_tags(["debian", "ubuntu"]);
        for command in cmds.iter() {
            assert!(command.has_tag("debian"));
            assert!(command.has_tag("ubuntu"));
        }
    }

    #[test]
    fn test_with_tags_is_idempotent() {
        let once = Commands::new().add("a").with_tags(["x"]);
        let twice = once.clone().with_tags(["x"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_tagged_filters_in_order() {
        let cmds = Commands::new()
            .add_all(Commands::new().add("a").with_tags(["debian"]))
            .add("untagged")
            .add_all(Commands::new().add("b").with_tags(["debian"]));

        let debian: Vec<_> = cmds.tagged("debian").iter().map(|c| c.cmd.as_str()).collect();
        assert_eq!(debian, vec!["a", "b"]);
    }

    #[test]
    fn test_to_script_joins_with_newlines() {
        let cmds = Commands::new().add("echo one").add("echo two");
        assert_eq!(cmds.to_script(), "echo one\necho two");
    }

    #[test]
    fn test_empty_sequence() {
        let cmds = Commands::new();
        assert!(cmds.is_empty());
        assert_eq!(cmds.len(), 0);
        assert_eq!(cmds.to_script(), "");
    }
}
