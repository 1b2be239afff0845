/// The chef persona, recipe format rules and refusal policy sent as the
/// leading `system` turn of every conversation that lacks one.
pub const INSTRUCTION_TEXT: &str = include_str!("./instruction.md");
