use criterion::{criterion_group, criterion_main, Criterion};
use s3_sigv2::{authorization, Credential, SigningRequest};

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sigv2");

    group.bench_function("authorization", |b| {
        let req = SigningRequest::new(
            "PUT",
            "/bucket/key",
            Credential::new("access_key_id", "secret_access_key"),
        )
        .with_content_type("text/plain")
        .with_date("Thu, 01 Jan 1970 00:00:00 GMT")
        .with_header("x-amz-acl", "private")
        .with_header("x-amz-meta-foo", "1")
        .with_header("x-amz-meta-bar", "2");

        b.iter(|| authorization(&req).expect("must success"))
    });

    group.finish();
}
