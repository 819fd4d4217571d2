use portfolio::core::state::{ContactField, ContactForm};
use portfolio::{Catalog, ProjectRecord, ResultImage};
use serde_json::{Value, json};

/// The catalog compiled into the binary.
pub fn embedded_catalog() -> Catalog {
    Catalog::embedded().expect("Embedded catalog should be valid")
}

/// Looks up a record from the embedded catalog, panicking if it is missing.
pub fn embedded_project(id: &str) -> ProjectRecord {
    embedded_catalog()
        .find_project(id)
        .cloned()
        .unwrap_or_else(|| panic!("Embedded catalog should contain {id}"))
}

/// A minimal valid record with the given id
pub fn make_record(id: &str) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: format!("Title {id}"),
        subtitle: "Subtitle".to_string(),
        short_description: "Short description".to_string(),
        thumbnail: None,
        overview: "Overview".to_string(),
        problem: "Problem".to_string(),
        approach: "Approach".to_string(),
        results: "Results".to_string(),
        results_images: vec![ResultImage {
            src: "/images/figure.png".to_string(),
            caption: None,
        }],
        conclusion: None,
        tags: vec!["Rust".to_string()],
        technologies: vec!["Rust".to_string(), "Rust".to_string()],
        github: format!("https://github.com/example/{id}"),
        demo: None,
    }
}

/// JSON form of a minimal valid record, for tests that edit the document
pub fn make_record_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Title",
        "subtitle": "Subtitle",
        "shortDescription": "Short description",
        "overview": "Overview",
        "problem": "Problem",
        "approach": "Approach",
        "results": "Results",
        "tags": ["Rust"],
        "technologies": ["Rust"],
        "github": "https://github.com/example/repo",
        "demo": null
    })
}

/// A contact form with every field filled in
pub fn filled_form() -> ContactForm {
    let mut form = ContactForm::default();
    form.set_field(ContactField::Name, "Ada".to_string());
    form.set_field(ContactField::Email, "ada@example.com".to_string());
    form.set_field(ContactField::Message, "Hello there".to_string());
    form
}
