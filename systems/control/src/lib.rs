#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure control system translating adapter input captures into rover orders.
//!
//! Adapters report what the operator pressed as [`Capture`] values; the
//! system maps each capture onto the instruction it stands for. Captures
//! with no mapping translate to nothing so adapters can forward raw input
//! without pre-filtering.

use planet_rover_core::Instruction;

/// Input capture reported by an adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capture {
    /// Up arrow key.
    ArrowUp,
    /// Down arrow key.
    ArrowDown,
    /// Left arrow key.
    ArrowLeft,
    /// Right arrow key.
    ArrowRight,
    /// On-screen forward button.
    ForwardButton,
    /// On-screen backward button.
    BackwardButton,
    /// On-screen turn-left button.
    TurnLeftButton,
    /// On-screen turn-right button.
    TurnRightButton,
}

impl Capture {
    /// Resolves an adapter-reported token into a capture.
    ///
    /// Recognises the arrow-key names emitted by keyboard adapters and the
    /// button identifiers emitted by pointer adapters. Unknown tokens yield
    /// `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "forward-btn" => Some(Self::ForwardButton),
            "backward-btn" => Some(Self::BackwardButton),
            "turn-left-btn" => Some(Self::TurnLeftButton),
            "turn-right-btn" => Some(Self::TurnRightButton),
            _ => None,
        }
    }
}

/// Control system mapping captures onto rover instructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Control;

impl Control {
    /// Creates a new control system instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Translates a capture into the instruction it commands, if any.
    #[must_use]
    pub fn translate(&self, capture: Capture) -> Option<Instruction> {
        match capture {
            Capture::ArrowUp | Capture::ForwardButton => Some(Instruction::Forward),
            Capture::ArrowDown | Capture::BackwardButton => Some(Instruction::Backward),
            Capture::ArrowLeft | Capture::TurnLeftButton => Some(Instruction::TurnLeft),
            Capture::ArrowRight | Capture::TurnRightButton => Some(Instruction::TurnRight),
        }
    }

    /// Translates a raw adapter token, combining capture resolution and
    /// instruction mapping.
    #[must_use]
    pub fn translate_token(&self, token: &str) -> Option<Instruction> {
        Capture::from_token(token).and_then(|capture| self.translate(capture))
    }
}
