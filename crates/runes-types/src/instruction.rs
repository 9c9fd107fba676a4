//! Renderer-facing instruction stream.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic sender identity used by the generated tests (`_setUpActor(USER1)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    #[serde(rename = "USER1")]
    User1,
    #[serde(rename = "USER2")]
    User2,
    #[serde(rename = "USER3")]
    User3,
}

impl Actor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Actor::User1 => "USER1",
            Actor::User2 => "USER2",
            Actor::User3 => "USER3",
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One directive in a generated test body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instruction {
    /// Switch the acting sender.
    ActorSwitch { actor: Actor },
    /// Warp time forward by `seconds` (decimal string).
    Delay { seconds: String },
    /// Call `function` with the given argument literals.
    Invoke { function: String, args: Vec<String> },
}

impl Instruction {
    pub fn invoke(function: impl Into<String>, args: Vec<String>) -> Self {
        Instruction::Invoke {
            function: function.into(),
            args,
        }
    }

    /// Argument literals joined with `", "`. Empty for non-invoke instructions.
    pub fn param_list(&self) -> String {
        match self {
            Instruction::Invoke { args, .. } => args.join(", "),
            Instruction::ActorSwitch { .. } | Instruction::Delay { .. } => String::new(),
        }
    }
}
