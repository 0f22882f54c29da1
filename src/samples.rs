use std::io::{self, Write};

use crate::object::{Attr, Object};
use crate::types::MemberDecl;

/// Anything that can make a noise
pub trait Sound {
    const NOISE: &'static str;

    fn sound(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", Self::NOISE)
    }
}

const SOUND_MEMBERS: &[MemberDecl] = &[MemberDecl::method("sound", 0)];

#[derive(Debug)]
pub struct Duck;

#[derive(Debug)]
pub struct Cow;

#[derive(Debug)]
pub struct Car;

impl Sound for Duck {
    const NOISE: &'static str = "Quack!";
}

impl Sound for Cow {
    const NOISE: &'static str = "Mooo!";
}

impl Sound for Car {
    const NOISE: &'static str = "Honk honk!";
}

// Resolve the one member every emitter registers
fn sound_attr<'a, S: Sound>(emitter: &'a S, name: &str) -> Option<Attr<'a>> {
    match name {
        "sound" => Some(Attr::callable(move |out| emitter.sound(out))),
        _ => None,
    }
}

impl Object for Duck {
    fn own_members(&self) -> &'static [MemberDecl] {
        SOUND_MEMBERS
    }

    fn own_attr(&self, name: &str) -> Option<Attr<'_>> {
        sound_attr(self, name)
    }
}

impl Object for Cow {
    fn own_members(&self) -> &'static [MemberDecl] {
        SOUND_MEMBERS
    }

    fn own_attr(&self, name: &str) -> Option<Attr<'_>> {
        sound_attr(self, name)
    }
}

impl Object for Car {
    fn own_members(&self) -> &'static [MemberDecl] {
        SOUND_MEMBERS
    }

    fn own_attr(&self, name: &str) -> Option<Attr<'_>> {
        sound_attr(self, name)
    }
}
