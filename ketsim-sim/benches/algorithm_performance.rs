use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ketsim_gates::{multi_gate, Gate};
use ketsim_matrices::Matrix;
use ketsim_sim::{measure, qft, sample, GroverCircuit, SudokuCircuit};

// Linear congruential generator for reproducible benchmarks
struct BenchRng {
    state: u64,
}

impl BenchRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345);
        ((self.state / 65536) % 32768) as f64 / 32768.0
    }
}

fn bench_grover_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("grover_assembly");

    for size in [2, 3, 4, 5].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| GroverCircuit::new(black_box(size), 1).unwrap());
        });
    }

    group.finish();
}

fn bench_grover_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("grover_run");

    for size in [2, 3, 4, 5].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let search = GroverCircuit::new(size, 1).unwrap();
            b.iter(|| search.run().unwrap());
        });
    }

    group.finish();
}

fn bench_qft_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("qft_assembly");

    for size in [2, 4, 6].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| qft(black_box(size)).unwrap());
        });
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    for num_qubits in [6, 8, 10].iter() {
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_qubits", num_qubits)),
            num_qubits,
            |b, &num_qubits| {
                let every: Vec<usize> = (0..num_qubits).collect();
                let wall = multi_gate(num_qubits, &every, Gate::Hadamard).unwrap();
                let initial = Matrix::basis_column(1 << num_qubits, 0).unwrap();
                let state = wall.dot(&initial).unwrap();
                let probabilities = measure(&state).unwrap();
                let mut rng = BenchRng::new(123);

                b.iter(|| sample(black_box(&probabilities), &mut || rng.next()));
            },
        );
    }

    group.finish();
}

fn bench_sudoku_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("sudoku");
    group.sample_size(10);

    group.bench_function("assemble", |b| {
        b.iter(|| SudokuCircuit::new().unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_grover_assembly,
    bench_grover_run,
    bench_qft_assembly,
    bench_sampling,
    bench_sudoku_assembly
);
criterion_main!(benches);
