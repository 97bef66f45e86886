// Proptest generators for match commands.
// Names and codes are drawn from small pools so that random sequences reach
// the active phase, captures and wins often enough to matter.

use proptest::prelude::*;

#[derive(Debug, Clone)]
pub enum Cmd {
    Setup(Vec<String>),
    Move { character: String, code: String },
    Reset,
}

pub fn piece_name() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => Just("P1".to_string()),
        3 => Just("P2".to_string()),
        3 => Just("P3".to_string()),
        3 => Just("H1".to_string()),
        3 => Just("H2".to_string()),
        1 => Just("X1".to_string()),
    ]
}

pub fn move_code() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => prop::sample::select(vec!["L", "R", "F", "B", "FL", "FR", "BL", "BR"])
            .prop_map(str::to_string),
        1 => Just("ZZ".to_string()),
    ]
}

pub fn character() -> impl Strategy<Value = String> {
    (prop::option::of(prop::sample::select(vec!["A", "B"])), piece_name()).prop_map(
        |(owner, name)| match owner {
            Some(owner) => format!("{owner}-{name}"),
            None => name,
        },
    )
}

pub fn command() -> impl Strategy<Value = Cmd> {
    prop_oneof![
        3 => prop::collection::vec(piece_name(), 0..=6).prop_map(Cmd::Setup),
        12 => (character(), move_code())
            .prop_map(|(character, code)| Cmd::Move { character, code }),
        1 => Just(Cmd::Reset),
    ]
}

pub fn command_sequence() -> impl Strategy<Value = Vec<Cmd>> {
    prop::collection::vec(command(), 1..80)
}
