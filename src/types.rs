use serde::{Serialize, Deserialize};

/// Member kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Method,
    MutMethod,
    Field,
}

/// Where a member comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Builtin,
    Declared,
}

/// Static registry entry for one member of a type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberDecl {
    pub name: &'static str,
    pub kind: MemberKind,
    pub arity: u8,
}

impl MemberDecl {
    pub const fn method(name: &'static str, arity: u8) -> Self {
        MemberDecl { name, kind: MemberKind::Method, arity }
    }

    pub const fn mut_method(name: &'static str, arity: u8) -> Self {
        MemberDecl { name, kind: MemberKind::MutMethod, arity }
    }

    pub const fn field(name: &'static str) -> Self {
        MemberDecl { name, kind: MemberKind::Field, arity: 0 }
    }
}

/// Member information as shown by the inspector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    pub name: String,
    pub kind: MemberKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arity: Option<u8>,
    pub origin: Origin,
}

impl MemberInfo {
    pub fn from_decl(decl: &MemberDecl, origin: Origin) -> Self {
        let arity = match decl.kind {
            MemberKind::Field => None,
            MemberKind::Method | MemberKind::MutMethod => Some(decl.arity),
        };
        MemberInfo {
            name: decl.name.to_string(),
            kind: decl.kind,
            arity,
            origin,
        }
    }
}

/// Result of inspecting one object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectReport {
    pub type_name: String,
    pub members: Vec<MemberInfo>,
}

impl ObjectReport {
    pub fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m.name == name)
    }
}
