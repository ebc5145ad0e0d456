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

// parser.rs
//
// Turns a line of the form `OPCODE WRITE READ1 READ2 ...` into an
// Instruction. Tokenizes on a single space, matching `InstructionCreator`:
// consecutive spaces or tabs produce empty tokens rather than being
// collapsed, so malformed whitespace is reported rather than silently fixed.

use crate::errors::SimulatorError;
use crate::instruction::Instruction;

pub fn parse_instruction(line: &str) -> Result<Instruction, SimulatorError> {
    let tokens: Vec<&str> = line.split(' ').collect();
    let opcode = tokens
        .first()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| SimulatorError::InputMalformed(format!("missing opcode in {:?}", line)))?;
    let write = tokens
        .get(1)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| SimulatorError::InputMalformed(format!("missing write register in {:?}", line)))?;
    let reads: Vec<String> = tokens[2..].iter().map(|t| t.to_string()).collect();
    Ok(Instruction::new(*opcode, Some(write.to_string()), reads))
}

pub fn parse_program(source: &str) -> Result<Vec<Instruction>, SimulatorError> {
    source
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(parse_instruction)
        .collect()
}
