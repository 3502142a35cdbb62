//! End-to-end pipeline tests: résumé text in, ranked and categorized
//! matches out.

use chrono::{Duration, Utc};

use match_engine::{
    EngineConfig, ExperienceLevel, JobPosting, MatchEngine, MatchOptions, RecommendationTier,
};

fn engine() -> MatchEngine {
    MatchEngine::new(EngineConfig::default())
}

fn posting(id: &str, title: &str, company: &str, skills: &[&str]) -> JobPosting {
    JobPosting {
        id: id.into(),
        title: title.into(),
        company: company.into(),
        location: "Berlin".into(),
        description: format!("{title} role at {company}."),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        ..JobPosting::default()
    }
}

#[test]
fn senior_keyword_overrides_mid_years() {
    let profile = engine()
        .build_candidate_profile("5 years of experience as a Senior Software Architect")
        .unwrap();

    assert_eq!(profile.experience.total_years, 5);
    // 5 years alone says mid; "Senior ... Architect" outranks it
    assert_eq!(profile.experience.level, ExperienceLevel::Senior);
}

#[test]
fn skills_land_in_their_categories() {
    let profile = engine()
        .build_candidate_profile("Core skills: Python, React, AWS, Docker.")
        .unwrap();

    let skills = &profile.skills;
    assert_eq!(skills.len(), 4);
    assert!(skills.categories["programming_languages"].contains("Python"));
    assert!(skills.categories["web_technologies"].contains("React"));
    assert!(skills.categories["cloud_platforms"].contains("AWS"));
    assert!(skills.categories["devops_tools"].contains("Docker"));

    // no duplicate case-insensitive entries
    let lowered: Vec<String> = skills.all_skills.iter().map(|s| s.to_lowercase()).collect();
    let mut deduped = lowered.clone();
    deduped.dedup();
    assert_eq!(lowered, deduped);
}

#[test]
fn half_covered_posting_scores_fair() {
    let engine = engine();
    let profile = engine
        .build_candidate_profile("Engineer with skills in Python and SQL, 4 years of experience")
        .unwrap();

    let job = posting("j1", "Engineer", "Acme", &["Python", "SQL", "AWS", "Docker"]);
    let report = engine.match_against_jobs(&profile, &[job], &MatchOptions::default());

    assert_eq!(report.ranked.len(), 1);
    let result = &report.ranked[0];
    assert!((result.score_breakdown.skill_alignment - 0.5).abs() < 1e-9);
    assert!(result.total_score >= 40.0 && result.total_score < 60.0);
    assert_eq!(result.recommendation_tier, RecommendationTier::Fair);
    assert!(result.missing_skills.contains(&"AWS".to_string()));
    assert!(result.missing_skills.contains(&"Docker".to_string()));
}

#[test]
fn duplicate_postings_keep_first_occurrence() {
    let engine = engine();
    let profile = engine
        .build_candidate_profile("Python developer, 3 years of experience with Django")
        .unwrap();

    let jobs = vec![
        posting("original", "Python Developer", "Acme", &["Python"]),
        posting("copy", "python developer", "ACME", &["Python", "Django"]),
    ];
    let report = engine.match_against_jobs(&profile, &jobs, &MatchOptions::default());

    assert_eq!(report.ranked.len(), 1);
    assert_eq!(report.ranked[0].job_id, "original");
}

#[test]
fn recency_breaks_raw_score_ties() {
    let engine = engine();
    let profile = engine
        .build_candidate_profile("Python developer, 3 years of experience")
        .unwrap();
    let now = Utc::now();

    let mut a = posting("a", "Python Developer", "Acme", &["Python"]);
    a.posted_date = Some(now - Duration::days(40));
    let mut b = posting("b", "Python Developer", "Globex", &["Python"]);
    b.posted_date = Some(now - Duration::days(2));
    let mut c = posting("c", "Python Developer", "Initech", &["Python"]);
    c.posted_date = Some(now - Duration::days(40));

    let report =
        engine.match_against_jobs(&profile, &[a, b, c], &MatchOptions::default());
    let order: Vec<&str> = report.ranked.iter().map(|r| r.job_id.as_str()).collect();
    assert_eq!(order, vec!["b", "a", "c"]);
}

#[test]
fn data_skills_suggest_data_scientist() {
    let profile = engine()
        .build_candidate_profile(
            "3 years of experience in analytics using Python, TensorFlow and Pandas",
        )
        .unwrap();

    assert_eq!(profile.role.primary_role, "Data Scientist");
    let scores = &profile.role.role_scores;
    assert!(
        scores.get("Data Scientist").copied().unwrap_or(0.0)
            > scores.get("Frontend Developer").copied().unwrap_or(0.0)
    );
}

#[test]
fn matching_is_deterministic() {
    let engine = engine();
    let text = "Senior backend engineer, 8 years of experience. Python, Docker, PostgreSQL, AWS.";
    let jobs = vec![
        posting("1", "Senior Backend Developer", "Acme", &["Python", "AWS"]),
        posting("2", "Platform Engineer", "Globex", &["Docker", "Kubernetes"]),
        posting("3", "Data Analyst", "Initech", &["SQL", "Tableau"]),
    ];

    let profile = engine.build_candidate_profile(text).unwrap();
    let first = engine.match_against_jobs(&profile, &jobs, &MatchOptions::default());
    let second = engine.match_against_jobs(&profile, &jobs, &MatchOptions::default());

    let first_json = serde_json::to_string(&first.ranked).unwrap();
    let second_json = serde_json::to_string(&second.ranked).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn all_scores_stay_in_bounds() {
    let engine = engine();
    let profile = engine
        .build_candidate_profile("Full stack developer, 6 years of experience. React, Node.js, SQL.")
        .unwrap();

    let jobs = vec![
        posting("1", "Senior Full Stack Developer (urgent)", "Acme", &["React", "Node.js", "SQL"]),
        posting("2", "Receptionist", "Globex", &[]),
        posting("3", "Junior Intern", "Initech", &["Excel"]),
    ];
    let options = MatchOptions {
        min_score: Some(0.0),
        limit: None,
    };
    let report = engine.match_against_jobs(&profile, &jobs, &options);

    for result in &report.ranked {
        assert!(result.total_score >= 0.0 && result.total_score <= 100.0);
        assert!(!result.explanation.is_empty());
    }
}

#[test]
fn empty_job_list_is_safe() {
    let engine = engine();
    let profile = engine
        .build_candidate_profile("Python developer with 2 years of experience")
        .unwrap();
    let report = engine.match_against_jobs(&profile, &[], &MatchOptions::default());
    assert!(report.ranked.is_empty());
    assert!(report.categories.is_empty());
}

#[test]
fn profile_with_no_skills_still_gets_default_role() {
    let profile = engine()
        .build_candidate_profile("I enjoy long walks and have 4 years of experience gardening")
        .unwrap();

    assert_eq!(profile.role.primary_role, "Software Engineer");
    assert!(profile.skills.is_empty() || profile.skill_density >= 0.0);
}
