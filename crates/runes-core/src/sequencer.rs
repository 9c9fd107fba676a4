//! Call sequencing.
//!
//! Turns an ordered call list into the instruction stream a test template
//! renders: an actor switch whenever the sender changes, a delay when the
//! transaction warps time, then the call itself.

use runes_types::{Actor, Instruction, ParsedCall};

/// Echidna's default sender addresses.
pub const USER1_ADDRESS: &str = "0x0000000000000000000000000000000000010000";
pub const USER2_ADDRESS: &str = "0x0000000000000000000000000000000000020000";
pub const USER3_ADDRESS: &str = "0x0000000000000000000000000000000000030000";

/// Map a sender address to its actor. Unknown senders act as [`Actor::User1`].
pub fn actor_for_address(address: &str) -> Actor {
    if address.eq_ignore_ascii_case(USER2_ADDRESS) {
        Actor::User2
    } else if address.eq_ignore_ascii_case(USER3_ADDRESS) {
        Actor::User3
    } else {
        Actor::User1
    }
}

/// Single-pass sequencer; the only state is the last emitted actor.
#[derive(Debug, Default)]
pub struct CallSequencer {
    last_actor: Option<Actor>,
    instructions: Vec<Instruction>,
}

impl CallSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, call: &ParsedCall) {
        let actor = actor_for_address(&call.src);
        if self.last_actor != Some(actor) {
            self.instructions.push(Instruction::ActorSwitch { actor });
            self.last_actor = Some(actor);
        }

        if call.has_delay {
            self.instructions.push(Instruction::Delay {
                seconds: call.delay_value.clone(),
            });
        }

        if !call.function_name.is_empty() {
            self.instructions.push(Instruction::invoke(
                call.function_name.clone(),
                call.parameters.iter().map(|p| p.value.clone()).collect(),
            ));
        }
    }

    pub fn finish(self) -> Vec<Instruction> {
        self.instructions
    }
}

/// Sequence `calls` into instructions, preserving call order.
pub fn sequence(calls: &[ParsedCall]) -> Vec<Instruction> {
    let mut sequencer = CallSequencer::new();
    for call in calls {
        sequencer.push(call);
    }
    sequencer.finish()
}
