use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gyh::Scanner;

fn scanner_benchmark(c: &mut Criterion) {
    let source = r#"
        PROGRAMA
        DECLARAR
          total: INTEGER
          media: REAL
        INICIO
          LER total
          media := total / 2.5   # average
          SE media >= 10 E total != 0 ENTAO
            IMPRIMIR "alto"
          ENQTO total > 0
            total := total - 1
        FINAL
    "#
    .repeat(50);

    c.bench_function("tokenize program", |b| {
        b.iter(|| {
            let mut scanner = Scanner::from_text(black_box(&source));
            scanner.scan_tokens().unwrap()
        })
    });

    let with_errors = "X := 5 @ \"open\n".repeat(500);
    c.bench_function("tokenize with lexical errors", |b| {
        b.iter(|| {
            let mut scanner = Scanner::from_text(black_box(&with_errors));
            scanner.scan_tokens().unwrap()
        })
    });
}

criterion_group!(benches, scanner_benchmark);
criterion_main!(benches);
