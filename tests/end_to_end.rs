use std::fs;

use jobmatch::{
    load_postings, load_profile_embedding, load_profile_text, render_json, render_text, run,
    write_matches, MatchConfig, MatchInputs, OutputFormat, OutputOptions, Posting,
};

fn posting(id: &str, embedding: &[f32], skills: &[&str]) -> Posting {
    Posting {
        id: id.into(),
        title: format!("Posting {id}"),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        embedding: embedding.to_vec(),
        ..Default::default()
    }
}

fn two_postings(first_skills: &[&str]) -> Vec<Posting> {
    vec![
        posting("1", &[1.0, 0.0], first_skills),
        posting("2", &[0.0, 1.0], &[]),
    ]
}

#[test]
fn similarity_only_match_returns_best_posting() {
    let inputs = MatchInputs {
        profile_embedding: vec![1.0, 0.0],
        postings: two_postings(&[]),
        profile_text: None,
    };
    let cfg = MatchConfig::default().with_top_k(1).with_min_similarity(0.4);

    let ranked = run(&inputs, &cfg).expect("run");
    assert_eq!(ranked.len(), 1);
    let top = &ranked[0];
    assert_eq!(top.posting.id, "1");
    assert!((top.embedding_similarity - 1.0).abs() < 1e-6);
    assert_eq!(top.keyword_relevance, 0.0);
    assert!((top.similarity - 0.6).abs() < 1e-6);
}

#[test]
fn fused_score_below_threshold_is_dropped() {
    let inputs = MatchInputs {
        profile_embedding: vec![1.0, 0.0],
        postings: two_postings(&["Rust"]),
        profile_text: Some("SKILLS:\n* Rust".into()),
    };
    let cfg = MatchConfig::default().with_top_k(1).with_min_similarity(0.7);

    // 0.6 * 1.0 + 0.4 * 0.2 = 0.68, below 0.7 after fusion.
    let ranked = run(&inputs, &cfg).expect("run");
    assert!(ranked.is_empty());

    // The same posting clears a 0.65 bar with the keyword boost.
    let ranked = run(&inputs, &cfg.with_min_similarity(0.65)).expect("run");
    assert_eq!(ranked.len(), 1);
    assert!((ranked[0].similarity - 0.68).abs() < 1e-6);
}

#[test]
fn empty_corpus_renders_zero_banner() {
    let inputs = MatchInputs {
        profile_embedding: vec![0.3, 0.4],
        postings: Vec::new(),
        profile_text: Some("SKILLS:\n* Rust".into()),
    };
    let ranked = run(&inputs, &MatchConfig::default()).expect("run");
    assert!(ranked.is_empty());

    let text = render_text(&ranked);
    assert_eq!(text, "============= Top 0 Job Matches =============\n\n");
    assert!(!text.contains("Match #"));
    assert_eq!(render_json(&ranked, false).expect("json").trim(), "[]");
}

#[test]
fn file_inputs_to_text_artifact() {
    let dir = tempfile::tempdir().expect("tempdir");
    let embedding_path = dir.path().join("profile_embedding.json");
    let postings_path = dir.path().join("postings.json");
    let text_path = dir.path().join("profile.txt");
    let output_path = dir.path().join("out/matched_jobs.txt");

    fs::write(&embedding_path, "[[0.6, 0.8]]").expect("write embedding");
    fs::write(
        &postings_path,
        r#"[
            {"id": 10, "title": "Backend Engineer", "location": "Remote",
             "source": "board", "description": "Build APIs in Rust. Own services.",
             "skills": "[\"Rust\", \"PostgreSQL\"]", "embedding": "[0.6, 0.8]"},
            {"id": 11, "title": "Pastry Chef", "location": "Paris",
             "source": "board", "description": "",
             "skills": ["Baking"], "embedding": [0.8, -0.6]}
        ]"#,
    )
    .expect("write postings");
    fs::write(
        &text_path,
        "SKILLS:\n* Rust\n* PostgreSQL\n\nEXPERIENCE:\nAcme (Backend Engineer) 5 years\n\nEDUCATION:\nDiploma in Computing",
    )
    .expect("write text");

    let inputs = MatchInputs {
        profile_embedding: load_profile_embedding(&embedding_path).expect("embedding"),
        postings: load_postings(&postings_path).expect("postings"),
        profile_text: Some(load_profile_text(&text_path).expect("text")),
    };
    let ranked = run(&inputs, &MatchConfig::default()).expect("run");

    // Posting 11 is orthogonal to the profile and never clears 0.25.
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].posting.id, "10");
    // Two skills and one title: 0.4 + 0.3 = 0.7; 0.6 + 0.28 = 0.88.
    assert!((ranked[0].keyword_relevance - 0.7).abs() < 1e-5);
    assert!((ranked[0].similarity - 0.88).abs() < 1e-5);

    let opts = OutputOptions {
        format: OutputFormat::Txt,
        include_embeddings: false,
    };
    write_matches(&output_path, &ranked, &opts).expect("write");
    let report = fs::read_to_string(&output_path).expect("read report");
    assert!(report.starts_with("============= Top 1 Job Matches =============\n\n"));
    assert!(report.contains("Match #1 (Similarity: 0.880000)\n"));
    assert!(report.contains("Title: Backend Engineer\n"));
    assert!(report.contains("Skills: Rust, PostgreSQL\n"));
    assert!(report.contains("Description Preview:\nBuild APIs in Rust\n"));
}

#[test]
fn json_artifact_round_trips_scores() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output_path = dir.path().join("matched_jobs.json");

    let inputs = MatchInputs {
        profile_embedding: vec![1.0, 0.0],
        postings: two_postings(&[]),
        profile_text: None,
    };
    let ranked = run(&inputs, &MatchConfig::default()).expect("run");
    write_matches(&output_path, &ranked, &OutputOptions::default()).expect("write");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).expect("read")).expect("json");
    let entries = value.as_array().expect("array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "1");
    assert_eq!(entries[0]["title"], "Posting 1");
    assert!(entries[0].get("embedding").is_none());
    assert!((entries[0]["similarity"].as_f64().expect("score") - 0.6).abs() < 1e-6);
}
