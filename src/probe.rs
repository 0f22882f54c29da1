use std::io::{self, Write};

use tracing::debug;

use crate::object::{Attr, Object};

/// What happened when a member was probed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Invoked,
    /// No member with that name
    Missing,
    /// The member exists but is not a zero-argument callable
    NotInvokable,
}

/// Invoke `member` on `obj` if it is callable with no arguments, otherwise
/// print the fallback line. Absence is not an error; only writing to `out`
/// can fail.
pub fn probe(obj: &dyn Object, member: &str, out: &mut dyn Write) -> io::Result<Outcome> {
    let outcome = match obj.attr(member) {
        Some(Attr::Callable(call)) => {
            call(&mut *out)?;
            Outcome::Invoked
        }
        Some(_) => Outcome::NotInvokable,
        None => Outcome::Missing,
    };

    if outcome != Outcome::Invoked {
        writeln!(out, "Could not invoke {} function", member)?;
    }

    debug!(member, type_name = obj.type_name(), ?outcome, "probed member");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::{Car, Cow, Duck};
    use crate::types::MemberDecl;

    // Has a `sound` member, but it is data
    struct Recording {
        title: String,
    }

    const RECORDING_MEMBERS: &[MemberDecl] = &[MemberDecl::field("sound")];

    impl Object for Recording {
        fn own_members(&self) -> &'static [MemberDecl] {
            RECORDING_MEMBERS
        }

        fn own_attr(&self, name: &str) -> Option<Attr<'_>> {
            match name {
                "sound" => Some(Attr::Value(self.title.clone())),
                _ => None,
            }
        }
    }

    fn probe_to_string(obj: &dyn Object, member: &str) -> (Outcome, String) {
        let mut buf = Vec::new();
        let outcome = probe(obj, member, &mut buf).unwrap();
        (outcome, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn emitters_make_their_sound() {
        assert_eq!(probe_to_string(&Duck, "sound"), (Outcome::Invoked, "Quack!\n".to_string()));
        assert_eq!(probe_to_string(&Cow, "sound"), (Outcome::Invoked, "Mooo!\n".to_string()));
        assert_eq!(probe_to_string(&Car, "sound"), (Outcome::Invoked, "Honk honk!\n".to_string()));
    }

    #[test]
    fn empty_sequence_falls_back() {
        let empty: Vec<u8> = Vec::new();
        let (outcome, printed) = probe_to_string(&empty, "sound");
        assert_eq!(outcome, Outcome::Missing);
        assert_eq!(printed, "Could not invoke sound function\n");
    }

    #[test]
    fn data_member_is_not_invoked() {
        let recording = Recording { title: "Quack!".to_string() };
        let (outcome, printed) = probe_to_string(&recording, "sound");
        assert_eq!(outcome, Outcome::NotInvokable);
        assert_eq!(printed, "Could not invoke sound function\n");
    }

    #[test]
    fn mutator_is_not_invoked_and_sequence_is_untouched() {
        let mut items = Vec::with_capacity(4);
        items.push(1u8);
        let (outcome, printed) = probe_to_string(&items, "pop");
        assert_eq!(outcome, Outcome::NotInvokable);
        assert_eq!(printed, "Could not invoke pop function\n");
        assert_eq!(items, vec![1]);
    }

    #[test]
    fn other_members_can_be_probed() {
        let items = vec![1u8, 2, 3];
        assert_eq!(probe_to_string(&items, "len"), (Outcome::Invoked, "3\n".to_string()));
        assert_eq!(probe_to_string(&Duck, "fly").0, Outcome::Missing);
    }

    #[test]
    fn probing_twice_prints_the_same_thing() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(probe_to_string(&Duck, "sound"), probe_to_string(&Duck, "sound"));
        assert_eq!(probe_to_string(&empty, "sound"), probe_to_string(&empty, "sound"));
    }
}
