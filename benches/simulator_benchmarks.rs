use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tomasulo_sim::instruction::Instruction;
use tomasulo_sim::{engine, SimulatorConfig};

fn synthetic_program(len: usize) -> Vec<Instruction> {
    let mut program = Vec::with_capacity(len);
    for i in 0..len {
        match i % 4 {
            0 => program.push(Instruction::new(
                "ADD.D",
                Some(format!("F{}", i)),
                vec![format!("F{}", i.saturating_sub(1)), format!("F{}", i.saturating_sub(2))],
            )),
            1 => program.push(Instruction::new("MUL.D", Some(format!("F{}", i)), vec![format!("F{}", i.saturating_sub(1))])),
            2 => program.push(Instruction::new("DADDI", Some(format!("R{}", i)), vec![])),
            _ => program.push(Instruction::new(
                "L.D",
                Some(format!("F{}", i)),
                vec![format!("R{}", i.saturating_sub(1))],
            )),
        }
    }
    program
}

fn run_benchmark(c: &mut Criterion) {
    let config = SimulatorConfig::new().with_max_cycles(10_000);

    c.bench_function("run_small_program", |b| {
        let program = synthetic_program(16);
        b.iter(|| black_box(engine::run(program.clone(), &config)));
    });

    c.bench_function("run_large_program", |b| {
        let program = synthetic_program(512);
        b.iter(|| black_box(engine::run(program.clone(), &config)));
    });
}

criterion_group!(benches, run_benchmark);
criterion_main!(benches);
