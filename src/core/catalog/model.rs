use serde::Deserialize;

/// One project shown in the gallery and on its own detail page.
///
/// Records are deserialized from the catalog document and never mutated
/// afterwards. The legacy single-image shape (`resultsImage` plus
/// `resultsImageCaption`) is rejected by `deny_unknown_fields`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectRecord {
    /// Routing key, used in `/project/{id}`
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub short_description: String,
    pub thumbnail: Option<String>,
    pub overview: String,
    pub problem: String,
    pub approach: String,
    pub results: String,
    #[serde(default)]
    pub results_images: Vec<ResultImage>,
    pub conclusion: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub technologies: Vec<String>,
    pub github: String,
    pub demo: Option<String>,
}

/// A figure attached to the results section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResultImage {
    pub src: String,
    pub caption: Option<String>,
}

impl ProjectRecord {
    pub fn conclusion(&self) -> Option<&str> {
        self.conclusion.as_deref()
    }

    pub fn demo(&self) -> Option<&str> {
        self.demo.as_deref()
    }

    pub fn path(&self) -> String {
        format!("/project/{}", self.id)
    }

    /// Required text fields paired with their document names
    pub(super) fn required_text(&self) -> [(&'static str, &str); 7] {
        [
            ("title", self.title.as_str()),
            ("subtitle", self.subtitle.as_str()),
            ("shortDescription", self.short_description.as_str()),
            ("overview", self.overview.as_str()),
            ("problem", self.problem.as_str()),
            ("approach", self.approach.as_str()),
            ("results", self.results.as_str()),
        ]
    }
}

impl ResultImage {
    /// Alt text for the figure at `index` (zero based)
    pub fn alt_text(&self, index: usize) -> String {
        match &self.caption {
            Some(caption) => caption.clone(),
            None => format!("Results visualization {}", index + 1),
        }
    }
}
