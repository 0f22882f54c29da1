use std::io::{self, Write};

use crate::types::{MemberDecl, MemberInfo, MemberKind, Origin};

/// A zero-argument behavior bound to the object it was looked up on
pub type Thunk<'a> = Box<dyn Fn(&mut dyn Write) -> io::Result<()> + 'a>;

/// What a member lookup found
pub enum Attr<'a> {
    /// Callable through a shared reference with no arguments
    Callable(Thunk<'a>),
    /// A method that needs arguments or `&mut self`
    Signature { kind: MemberKind, arity: u8 },
    /// A plain data value, already rendered
    Value(String),
}

impl<'a> Attr<'a> {
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&mut dyn Write) -> io::Result<()> + 'a,
    {
        Attr::Callable(Box::new(f))
    }

    pub fn signature(decl: &MemberDecl) -> Self {
        Attr::Signature { kind: decl.kind, arity: decl.arity }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Attr::Callable(_))
    }
}

/// Members every object gets from the `Object` trait itself
pub const BUILTIN_MEMBERS: &[MemberDecl] = &[
    MemberDecl::method("attr", 1),
    MemberDecl::method("members", 0),
    MemberDecl::method("type_name", 0),
];

// Find a declaration by name in a static registry
pub fn find_decl(decls: &'static [MemberDecl], name: &str) -> Option<&'static MemberDecl> {
    decls.iter().find(|d| d.name == name)
}

/// Runtime view of a value: its type name, its members, and lookup by name.
///
/// Rust has no general reflection, so each type declares its members in a
/// static registry (`own_members`) and resolves them in `own_attr`. The two
/// must agree: `attr(name)` is `Some` exactly for the names in `members()`.
pub trait Object {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn own_members(&self) -> &'static [MemberDecl];

    fn own_attr(&self, name: &str) -> Option<Attr<'_>>;

    /// Built-in and declared members, sorted by name
    fn members(&self) -> Vec<MemberInfo> {
        let mut members: Vec<MemberInfo> = BUILTIN_MEMBERS
            .iter()
            .map(|d| MemberInfo::from_decl(d, Origin::Builtin))
            .chain(
                self.own_members()
                    .iter()
                    .map(|d| MemberInfo::from_decl(d, Origin::Declared)),
            )
            .collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        members
    }

    fn attr(&self, name: &str) -> Option<Attr<'_>> {
        match name {
            "type_name" => Some(Attr::callable(move |out| writeln!(out, "{}", self.type_name()))),
            "members" => Some(Attr::callable(move |out| {
                let members = self.members();
                let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
                writeln!(out, "{:?}", names)
            })),
            "attr" => Some(Attr::Signature { kind: MemberKind::Method, arity: 1 }),
            _ => self.own_attr(name),
        }
    }
}

const SEQUENCE_MEMBERS: &[MemberDecl] = &[
    MemberDecl::method("capacity", 0),
    MemberDecl::method("contains", 1),
    MemberDecl::method("get", 1),
    MemberDecl::method("is_empty", 0),
    MemberDecl::method("len", 0),
    MemberDecl::mut_method("clear", 0),
    MemberDecl::mut_method("extend", 1),
    MemberDecl::mut_method("insert", 2),
    MemberDecl::mut_method("pop", 0),
    MemberDecl::mut_method("push", 1),
    MemberDecl::mut_method("remove", 1),
    MemberDecl::mut_method("reverse", 0),
    MemberDecl::mut_method("sort", 0),
    MemberDecl::mut_method("swap", 2),
    MemberDecl::mut_method("truncate", 1),
];

impl<T> Object for Vec<T> {
    fn own_members(&self) -> &'static [MemberDecl] {
        SEQUENCE_MEMBERS
    }

    fn own_attr(&self, name: &str) -> Option<Attr<'_>> {
        match name {
            "len" => Some(Attr::callable(move |out| writeln!(out, "{}", self.len()))),
            "is_empty" => Some(Attr::callable(move |out| writeln!(out, "{}", self.is_empty()))),
            "capacity" => Some(Attr::callable(move |out| writeln!(out, "{}", self.capacity()))),
            // Mutators stay uncallable: probing never takes `&mut`
            _ => find_decl(SEQUENCE_MEMBERS, name).map(Attr::signature),
        }
    }
}
