use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn build_tiny_corpus(dir: &Path, docs: &[(&str, &str)]) {
    fs::create_dir_all(dir.join("transcripts")).unwrap();
    for (name, text) in docs {
        fs::write(dir.join("transcripts").join(name), text).unwrap();
    }
    fs::write(dir.join("stopwords.txt"), "the\na\n").unwrap();
}

fn termstat(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_termstat"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

#[test]
fn missing_corpus_exits_nonzero_without_output() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path(), &[]);
    let out = termstat(dir.path(), &["report", "--corpus", "nope", "--stopwords", "stopwords.txt"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope"));
}

#[test]
fn missing_stopwords_exits_nonzero_without_output() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path(), &[("d.txt", "cat")]);
    let out = termstat(dir.path(), &["report", "--corpus", "transcripts", "--stopwords", "missing.txt"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn default_paths_report_scenario() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/transcripts")).unwrap();
    fs::write(dir.path().join("src/transcripts/doc0.txt"), "The cat sat on a mat").unwrap();
    fs::write(dir.path().join("src/transcripts/doc1.txt"), "The cat ran").unwrap();
    fs::write(dir.path().join("src/stopwords.txt"), "the a").unwrap();

    let out = termstat(dir.path(), &["report", "--precision", "3"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("WORD\tTF\tIDF\tTF*IDF\tProbability\ncat\t2\t0.000\t0.000\t0.222\nsat\t1\t0.301\t0.301\t0.111\n"));
}

#[test]
fn options_file_selects_snowball() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path(), &[("d.txt", "cry")]);
    fs::write(dir.path().join("opts.json"), r#"{"stemmer":"snowball"}"#).unwrap();

    let out = termstat(dir.path(), &["report", "--corpus", "transcripts", "--stopwords", "stopwords.txt", "--options", "opts.json"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("\ncri\t1\t0\t0\t1\n"));
}

#[test]
fn stemmer_flag_overrides_options_file() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path(), &[("d.txt", "cry café")]);
    fs::write(dir.path().join("opts.json"), r#"{"stemmer":"porter2","fold_diacritics":false}"#).unwrap();

    let out = termstat(
        dir.path(),
        &["report", "--corpus", "transcripts", "--stopwords", "stopwords.txt", "--options", "opts.json", "--stemmer", "porter", "--fold-diacritics"],
    );
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("\ncry\t1\t"));
    assert!(text.contains("\ncafe\t1\t"));
}

#[test]
fn bad_options_file_fails() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path(), &[("d.txt", "cry")]);
    fs::write(dir.path().join("opts.json"), r#"{"stemmer":"lancaster"}"#).unwrap();

    let out = termstat(dir.path(), &["report", "--corpus", "transcripts", "--stopwords", "stopwords.txt", "--options", "opts.json"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn json_format_is_parseable() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path(), &[("d0.txt", "The cat sat"), ("d1.txt", "cat")]);
    let out = termstat(dir.path(), &["report", "--corpus", "transcripts", "--stopwords", "stopwords.txt", "--format", "json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["document_count"], 2);
    assert_eq!(v["rows"][0]["term"], "cat");
    assert_eq!(v["rows"][0]["tf"], 2);
}

#[test]
fn stem_prints_word_and_stem() {
    let dir = tempdir().unwrap();
    let out = termstat(dir.path(), &["stem", "Running,", "ponies"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Running,\trun\nponies\tponi\n");

    let out = termstat(dir.path(), &["stem", "--stemmer", "porter2", "cry"]);
    assert_eq!(stdout(&out), "cry\tcri\n");
}
