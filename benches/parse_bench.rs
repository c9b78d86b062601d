use criterion::{Criterion, black_box, criterion_group, criterion_main};

use fatura::qr;

const MINIMAL: &str = "A:123456789*B:999999990*C:PT*D:FS*E:N*F:20210420*G:FS12344567891234/123456*H:0*I1:PT*N:3.97*O:30.31*Q:zrVG*R:9999";

const FULL: &str = "A:500000000*B:123456789*C:PT*D:FT*E:N*F:20240115*G:FT AT2024/15*H:JFJ2PPTD-15*I1:PT*I2:12.00*I3:100.00*I4:6.00*I5:50.00*I6:6.50*I7:200.00*I8:46.00*J1:PT-AC*J7:80.00*J8:12.80*K1:PT-MA*K3:10.00*K4:0.50*L:5.00*M:0.40*N:71.80*O:528.70*P:20.00*Q:ab1C*R:1234*S:Obrigado";

fn bench_parse_minimal(c: &mut Criterion) {
    c.bench_function("parse_minimal", |b| {
        b.iter(|| black_box(qr::parse(black_box(MINIMAL))));
    });
}

fn bench_parse_full(c: &mut Criterion) {
    c.bench_function("parse_three_regions", |b| {
        b.iter(|| black_box(qr::parse(black_box(FULL))));
    });
}

fn bench_reject_missing_fields(c: &mut Criterion) {
    let payload = "D:FS*E:N*F:20210420*H:0*I1:PT*N:3.97*O:30.31";
    c.bench_function("reject_missing_fields", |b| {
        b.iter(|| black_box(qr::parse(black_box(payload))));
    });
}

criterion_group!(
    benches,
    bench_parse_minimal,
    bench_parse_full,
    bench_reject_missing_fields,
);
criterion_main!(benches);
