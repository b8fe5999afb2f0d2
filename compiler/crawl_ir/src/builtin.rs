//! The fixed builtin table.
//!
//! Builtins are resolved by name at parse time. Any call whose name is not
//! in this table becomes a user function call, resolved at evaluation time.

/// Builtin operations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Builtin {
    Len,
    Print,
    Elem,
    Tuple,
    Move,
    RotateLeft,
    RotateRight,
    Forward,
    ReadFront,
    Rand,
}

impl Builtin {
    /// Every builtin, in table order.
    pub const ALL: [Builtin; 10] = [
        Builtin::Len,
        Builtin::Print,
        Builtin::Elem,
        Builtin::Tuple,
        Builtin::Move,
        Builtin::RotateLeft,
        Builtin::RotateRight,
        Builtin::Forward,
        Builtin::ReadFront,
        Builtin::Rand,
    ];

    /// Resolve a call name against the builtin table.
    pub fn from_name(name: &str) -> Option<Builtin> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    /// Source-level name.
    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Len => "len",
            Builtin::Print => "print",
            Builtin::Elem => "elem",
            Builtin::Tuple => "tuple",
            Builtin::Move => "move",
            Builtin::RotateLeft => "rotate_left",
            Builtin::RotateRight => "rotate_right",
            Builtin::Forward => "forward",
            Builtin::ReadFront => "read_front",
            Builtin::Rand => "rand",
        }
    }

    /// Whether the host must apply an effect before the script may continue.
    ///
    /// These builtins post an event and block the execution thread until the
    /// host resumes it.
    pub const fn is_host_effect(self) -> bool {
        matches!(
            self,
            Builtin::Move
                | Builtin::RotateLeft
                | Builtin::RotateRight
                | Builtin::Forward
                | Builtin::ReadFront
        )
    }
}
