use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jobmatch::{render_text, run, MatchConfig, MatchInputs, Posting};

const DIM: usize = 384;

const PROFILE_TEXT: &str = "SKILLS:\n* Rust\n* PostgreSQL\n* Kubernetes\n\n\
EXPERIENCE:\nAcme (Backend Engineer) 6 years\nGlobex (Platform Engineer) 2 years\n\n\
EDUCATION:\nDiploma in Computer Science";

fn sample_vector(seed: usize) -> Vec<f32> {
    (0..DIM)
        .map(|i| (((seed * 131 + i * 17) % 101) as f32) - 50.0)
        .collect()
}

fn corpus(size: usize) -> Vec<Posting> {
    const SKILLS: [&str; 6] = ["Rust", "Go", "PostgreSQL", "Kubernetes", "React", "Python"];
    (0..size)
        .map(|i| Posting {
            id: i.to_string(),
            title: if i % 5 == 0 {
                "Senior Backend Engineer".into()
            } else {
                format!("Engineer {i}")
            },
            description: "Design and run services. Collaborate with product.".into(),
            location: "Remote".into(),
            source: "bench".into(),
            skills: (0..3).map(|j| SKILLS[(i + j) % SKILLS.len()].to_string()).collect(),
            embedding: sample_vector(i),
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let cfg = MatchConfig::default().with_top_k(10).with_min_similarity(0.0);

    for size in [100, 1000, 5000] {
        let inputs = MatchInputs {
            profile_embedding: sample_vector(3),
            postings: corpus(size),
            profile_text: Some(PROFILE_TEXT.to_string()),
        };
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("run", size), &inputs, |b, inputs| {
            b.iter(|| run(black_box(inputs), &cfg).expect("run"))
        });
    }
    group.finish();

    let inputs = MatchInputs {
        profile_embedding: sample_vector(3),
        postings: corpus(1000),
        profile_text: Some(PROFILE_TEXT.to_string()),
    };
    let ranked = run(&inputs, &cfg).expect("run");
    c.bench_function("render_text_top10", |b| b.iter(|| render_text(black_box(&ranked))));
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
