// Copyright (c) 2024 Mudit Bhargava
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
//

// lib.rs
//
// Cycle-accurate simulator of Tomasulo's algorithm with a reorder buffer.
// The engine (tracker, reservation stations, functional units, CDB, ROB)
// lives at the crate root; `utils` holds the collaborators (textual parser,
// logging) that sit outside the engine's own invariants.

pub mod config;
pub mod engine;
pub mod errors;
pub mod functional_unit;
pub mod instruction;
pub mod record;
pub mod rename;
pub mod reorder_buffer;
pub mod report;
pub mod tracker;
pub mod utils;

pub use config::SimulatorConfig;
pub use engine::{get_max, run, RunResult};
pub use errors::SimulatorError;
pub use instruction::Instruction;
