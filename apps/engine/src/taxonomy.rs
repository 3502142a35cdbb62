//! SkillTaxonomy — static category → canonical skill table used for
//! keyword-based detection and categorization.
//!
//! Each skill carries a display form and a regex for its spelling variants
//! (`node.js` / `nodejs`, `golang` / `go`). Plain `\b` boundaries break on
//! symbol-bearing names like `c++` and `c#`, so matches are verified against
//! the surrounding characters instead (see [`count_occurrences`]).

use once_cell::sync::Lazy;
use regex::Regex;

/// One canonical skill: display form plus its detection pattern.
pub struct SkillPattern {
    pub display: &'static str,
    regex: Regex,
}

impl SkillPattern {
    fn new(display: &'static str, pattern: &str) -> Self {
        let regex = Regex::new(&format!("(?i){pattern}"))
            .unwrap_or_else(|e| panic!("invalid taxonomy pattern for {display}: {e}"));
        SkillPattern { display, regex }
    }

    /// Boundary-verified occurrence count in `text`.
    pub fn occurrences(&self, text: &str) -> u32 {
        count_occurrences(&self.regex, text)
    }
}

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: Vec<SkillPattern>,
}

/// Characters that may appear inside a skill token. Anything else (or the
/// text edge) counts as a boundary, so `java` never matches inside
/// `javascript` but does match before punctuation.
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'+' || b == b'#'
}

/// Counts matches of `re` in `text` that sit on token boundaries.
///
/// Boundaries are checked against the bytes adjacent to each match rather
/// than encoded into the pattern, so back-to-back occurrences are all
/// counted and symbol-final names (`c++`) terminate correctly.
pub fn count_occurrences(re: &Regex, text: &str) -> u32 {
    let bytes = text.as_bytes();
    let mut count = 0;
    for m in re.find_iter(text) {
        let before_ok = m.start() == 0 || !is_token_byte(bytes[m.start() - 1]);
        let after_ok = m.end() == bytes.len() || !is_token_byte(bytes[m.end()]);
        if before_ok && after_ok {
            count += 1;
        }
    }
    count
}

/// True if `needle` occurs anywhere in `text` on token boundaries.
pub fn contains_term(text: &str, needle: &str) -> bool {
    let pattern = format!("(?i){}", regex::escape(needle));
    match Regex::new(&pattern) {
        Ok(re) => count_occurrences(&re, text) > 0,
        Err(_) => false,
    }
}

macro_rules! skills {
    ($(($display:expr, $pattern:expr)),* $(,)?) => {
        vec![$(SkillPattern::new($display, $pattern)),*]
    };
}

/// The full taxonomy, built once. Read-only after initialization; safe to
/// share across concurrent scoring calls.
pub static TAXONOMY: Lazy<Vec<SkillCategory>> = Lazy::new(|| {
    vec![
        SkillCategory {
            name: "programming_languages",
            skills: skills![
                ("Python", "python"),
                ("Java", "java"),
                ("JavaScript", "java[ -]?script|\\bjs\\b"),
                ("TypeScript", "type[ -]?script"),
                ("C++", "c\\+\\+"),
                ("C#", "c#|c[ -]sharp"),
                ("Go", "golang|go"),
                ("Rust", "rust"),
                ("Ruby", "ruby"),
                ("PHP", "php"),
                ("Swift", "swift"),
                ("Kotlin", "kotlin"),
                ("Scala", "scala"),
                ("R", "r"),
                ("SQL", "sql"),
            ],
        },
        SkillCategory {
            name: "web_technologies",
            skills: skills![
                ("React", "react(?:\\.?js)?"),
                ("Angular", "angular(?:\\.?js)?"),
                ("Vue", "vue(?:\\.?js)?"),
                ("Node.js", "node\\.?js|node"),
                ("Express", "express(?:\\.?js)?"),
                ("Django", "django"),
                ("Flask", "flask"),
                ("FastAPI", "fast[ -]?api"),
                ("Spring Boot", "spring[ -]?boot|spring"),
                ("Rails", "rails|ruby on rails"),
                ("Next.js", "next\\.?js"),
                ("GraphQL", "graph[ -]?ql"),
                ("HTML", "html5?"),
                ("CSS", "css3?"),
            ],
        },
        SkillCategory {
            name: "databases",
            skills: skills![
                ("PostgreSQL", "postgres(?:ql)?"),
                ("MySQL", "my[ -]?sql"),
                ("MongoDB", "mongo(?:db)?"),
                ("Redis", "redis"),
                ("SQLite", "sqlite"),
                ("Elasticsearch", "elastic[ -]?search"),
                ("Cassandra", "cassandra"),
                ("DynamoDB", "dynamo[ -]?db"),
                ("Oracle", "oracle"),
            ],
        },
        SkillCategory {
            name: "cloud_platforms",
            skills: skills![
                ("AWS", "aws|amazon web services"),
                ("Azure", "azure"),
                ("GCP", "gcp|google cloud"),
                ("Heroku", "heroku"),
                ("DigitalOcean", "digital[ -]?ocean"),
                ("Cloudflare", "cloudflare"),
            ],
        },
        SkillCategory {
            name: "devops_tools",
            skills: skills![
                ("Docker", "docker"),
                ("Kubernetes", "kubernetes|k8s"),
                ("Terraform", "terraform"),
                ("Ansible", "ansible"),
                ("Jenkins", "jenkins"),
                ("Git", "git"),
                ("GitHub Actions", "github actions"),
                ("CI/CD", "ci/cd|ci[ -]cd"),
                ("Linux", "linux"),
                ("Nginx", "nginx"),
            ],
        },
        SkillCategory {
            name: "data_science",
            skills: skills![
                ("Machine Learning", "machine[ -]learning|\\bml\\b"),
                ("Deep Learning", "deep[ -]learning"),
                ("TensorFlow", "tensor[ -]?flow"),
                ("PyTorch", "py[ -]?torch"),
                ("Pandas", "pandas"),
                ("NumPy", "num[ -]?py"),
                ("Scikit-learn", "scikit[ -]?learn|sklearn"),
                ("NLP", "nlp|natural language processing"),
                ("Data Analysis", "data analysis|data analytics"),
                ("Statistics", "statistics|statistical modeling"),
                ("Spark", "spark"),
                ("Tableau", "tableau"),
            ],
        },
        SkillCategory {
            name: "mobile",
            skills: skills![
                ("iOS", "ios"),
                ("Android", "android"),
                ("React Native", "react[ -]native"),
                ("Flutter", "flutter"),
                ("Xamarin", "xamarin"),
            ],
        },
        SkillCategory {
            name: "soft_skills",
            skills: skills![
                ("Leadership", "leadership"),
                ("Communication", "communication"),
                ("Teamwork", "team[ -]?work"),
                ("Problem Solving", "problem[ -]solving"),
                ("Project Management", "project management"),
                ("Agile", "agile"),
                ("Scrum", "scrum"),
                ("Mentoring", "mentor(?:ing|ship)"),
            ],
        },
    ]
});
