// The engine's sole input type. Values are opaque strings: this simulator
// never computes an arithmetic result, it only tracks timing and hazards.

use serde::{Deserialize, Serialize};

/// A single in-order program instruction, as handed to the simulator by a
/// collaborator (textual parser, test harness, ...). Register names are
/// opaque strings; any two equal strings name the same register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub opcode: String,
    pub write_register: Option<String>,
    pub read_registers: Vec<String>,
}

impl Instruction {
    pub fn new(
        opcode: impl Into<String>,
        write_register: Option<String>,
        read_registers: Vec<String>,
    ) -> Self {
        Self {
            opcode: opcode.into(),
            write_register,
            read_registers,
        }
    }

    /// The functional-unit class this opcode is routed to. Any opcode not
    /// named explicitly below is integer-class.
    pub fn functional_unit_kind(&self) -> FunctionalUnitKind {
        match self.opcode.as_str() {
            "ADD.D" | "SUB.D" => FunctionalUnitKind::FpAdd,
            "MUL.D" => FunctionalUnitKind::FpMul,
            "DIV.D" => FunctionalUnitKind::FpDiv,
            _ => FunctionalUnitKind::Integer,
        }
    }
}

/// The four functional-unit classes. `L.D`, `DADDI`, and any opcode not
/// named in `functional_unit_kind` fall back to `Integer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionalUnitKind {
    Integer,
    FpAdd,
    FpMul,
    FpDiv,
}

impl FunctionalUnitKind {
    pub const ALL: [FunctionalUnitKind; 4] = [
        FunctionalUnitKind::Integer,
        FunctionalUnitKind::FpAdd,
        FunctionalUnitKind::FpMul,
        FunctionalUnitKind::FpDiv,
    ];

    pub fn unit_name(self) -> &'static str {
        match self {
            FunctionalUnitKind::Integer => "Int FU",
            FunctionalUnitKind::FpAdd => "FP Add FU",
            FunctionalUnitKind::FpMul => "FP Mul FU",
            FunctionalUnitKind::FpDiv => "FP Div FU",
        }
    }

    pub fn default_duration(self) -> usize {
        match self {
            FunctionalUnitKind::Integer => 1,
            FunctionalUnitKind::FpAdd => 2,
            FunctionalUnitKind::FpMul => 10,
            FunctionalUnitKind::FpDiv => 40,
        }
    }
}
