use directapply::catalog::{fetch_or_empty, JobSource, JsonFileCatalog};
use directapply::{Config, DeckError};
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn json_catalog_reads_camel_case_postings() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "a", "title": "Backend Engineer", "company": "CloudTech Solutions",
              "location": "Seattle, WA", "isVerified": true, "matchScore": 67,
              "skills": ["Python", "AWS", "Kubernetes", "Go"]}},
            {{"id": "b", "title": "Data Scientist", "company": "AI Innovations",
              "location": "Boston, MA", "matchScore": 180}},
            {{"id": "", "title": "Nameless", "company": "?", "location": "?"}}
        ]"#
    )
    .unwrap();

    let jobs = fetch_or_empty(&JsonFileCatalog::new(file.path()));
    assert_eq!(jobs.len(), 2);
    assert!(jobs[0].is_verified);
    assert_eq!(jobs[0].top_skills(3), ["Python", "AWS", "Kubernetes"]);
    assert_eq!(jobs[1].match_score, 100);
    assert!(jobs[1].salary.is_none());
}

#[test]
fn missing_or_malformed_catalog_is_empty() {
    let dir = tempdir().unwrap();
    let missing = JsonFileCatalog::new(dir.path().join("absent.json"));
    assert!(matches!(missing.fetch(), Err(DeckError::Io(_))));
    assert!(fetch_or_empty(&missing).is_empty());

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(
        JsonFileCatalog::new(&broken).fetch(),
        Err(DeckError::Catalog(_))
    ));
}

#[test]
fn config_file_overrides_and_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("directapply.toml");
    std::fs::write(
        &path,
        "swipe_threshold = 90\nspring_friction = 12.5\nstack_depth = \"lots\"\ntrace_level = \"debug\"\ncatalog_file = \"/srv/jobs.json\"\n",
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.gesture.swipe_threshold, 90.0);
    assert_eq!(config.gesture.spring_friction, 12.5);
    assert_eq!(config.stack_depth, 2);
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
    assert!(config.validate().is_ok());
    assert!(config.job_source().fetch().is_err());
}

#[test]
fn invalid_config_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "swipe_threshold = = 3").unwrap();
    assert!(matches!(Config::from_file(&path), Err(DeckError::Config(_))));

    std::fs::write(&path, "swipe_threshold = -5").unwrap();
    let config = Config::from_file(&path).unwrap();
    assert!(config.validate().is_err());
}
