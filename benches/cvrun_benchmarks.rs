use criterion::{Criterion, black_box, criterion_group, criterion_main};
use cvrun::{
    build::CompilerInvocation,
    cli::{ParsedCli, parse_cli_from},
    flags::BuildMode,
    utils::resolve_output_filepath,
};

// ---------------------------------------------------------------------------
// Invocation assembly benchmarks
// ---------------------------------------------------------------------------

fn bench_invocation_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("invocation_assembly");

    let sources: Vec<String> = (0..32).map(|i| format!("src/module_{i}.cpp")).collect();
    let library_flags: Vec<String> = "-I/usr/include/opencv4 -lopencv_core -lopencv_imgproc \
         -lopencv_imgcodecs -lopencv_highgui -lopencv_videoio"
        .split_whitespace()
        .map(String::from)
        .collect();

    for mode in [BuildMode::Debug, BuildMode::Release] {
        group.bench_function(format!("{mode}_32_sources"), |b| {
            b.iter(|| {
                let output = resolve_output_filepath(black_box(sources.as_slice()), None);
                CompilerInvocation::new(
                    "g++",
                    "-std=c++14",
                    mode,
                    output,
                    black_box(sources.as_slice()),
                    black_box(library_flags.as_slice()),
                )
            })
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Command-line parsing benchmarks
// ---------------------------------------------------------------------------

fn bench_cli_parsing(c: &mut Criterion) {
    let argv = [
        "cvrun", "build", "-s", "a.cpp", "b.cpp", "-r", "-x", "-a", "in.png", "--", "-k",
    ];

    c.bench_function("parse_build_command", |b| {
        b.iter(|| match parse_cli_from(black_box(argv)) {
            ParsedCli::Run(command) => command,
            ParsedCli::Exit { message, .. } => panic!("{message}"),
        })
    });
}

criterion_group!(benches, bench_invocation_assembly, bench_cli_parsing);
criterion_main!(benches);
