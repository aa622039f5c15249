//! Structured answer assembly.
//!
//! Answers are built as named sections (overview, link suggestions,
//! related questions) and rendered to text as the final step, so tests can
//! inspect the parts without parsing markdown.

use quad_core::types::FaqItem;

// =============================================================================
// Link bundles
// =============================================================================

/// A single suggested link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    pub label: &'static str,
    pub url: &'static str,
}

/// A titled group of links suggested for one category of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBundle {
    pub title: &'static str,
    pub links: &'static [LinkRef],
}

/// Category-keyed link bundles. Categories not listed here fall back to
/// [`DEFAULT_BUNDLE`].
const CATEGORY_BUNDLES: &[(&str, LinkBundle)] = &[
    (
        "Admissions",
        LinkBundle {
            title: "Admissions resources",
            links: &[
                LinkRef { label: "Apply online", url: "https://example.edu/admissions/apply" },
                LinkRef { label: "Important dates", url: "https://example.edu/admissions/dates" },
            ],
        },
    ),
    (
        "Courses & Programs",
        LinkBundle {
            title: "Program pages",
            links: &[
                LinkRef { label: "Program catalog", url: "https://example.edu/programs" },
                LinkRef { label: "Department list", url: "https://example.edu/departments" },
            ],
        },
    ),
    (
        "Fees & Scholarships",
        LinkBundle {
            title: "Fees and funding",
            links: &[
                LinkRef { label: "Fee structure", url: "https://example.edu/fees" },
                LinkRef { label: "Scholarship portal", url: "https://example.edu/scholarships" },
            ],
        },
    ),
    (
        "Placements",
        LinkBundle {
            title: "Placement cell",
            links: &[
                LinkRef { label: "Placement statistics", url: "https://example.edu/placements" },
                LinkRef { label: "Recruiter list", url: "https://example.edu/placements/recruiters" },
            ],
        },
    ),
    (
        "Campus Life",
        LinkBundle {
            title: "Around campus",
            links: &[
                LinkRef { label: "Hostel information", url: "https://example.edu/hostel" },
                LinkRef { label: "Clubs and events", url: "https://example.edu/campus-life" },
            ],
        },
    ),
    (
        "Examinations",
        LinkBundle {
            title: "Exam office",
            links: &[
                LinkRef { label: "Exam timetable", url: "https://example.edu/exams" },
                LinkRef { label: "Results portal", url: "https://example.edu/results" },
            ],
        },
    ),
    (
        "Library",
        LinkBundle {
            title: "Library services",
            links: &[
                LinkRef { label: "Catalog search", url: "https://example.edu/library" },
            ],
        },
    ),
    (
        "Sports",
        LinkBundle {
            title: "Sports facilities",
            links: &[
                LinkRef { label: "Facilities and timings", url: "https://example.edu/sports" },
            ],
        },
    ),
    (
        "Faculty",
        LinkBundle {
            title: "People",
            links: &[
                LinkRef { label: "Faculty directory", url: "https://example.edu/faculty" },
            ],
        },
    ),
    (
        "General Information",
        LinkBundle {
            title: "About the college",
            links: &[
                LinkRef { label: "College overview", url: "https://example.edu/about" },
                LinkRef { label: "Contact us", url: "https://example.edu/contact" },
            ],
        },
    ),
];

/// Bundle used when a category has no dedicated entry.
const DEFAULT_BUNDLE: LinkBundle = LinkBundle {
    title: "Useful links",
    links: &[
        LinkRef { label: "College website", url: "https://example.edu" },
        LinkRef { label: "Ask the office", url: "https://example.edu/contact" },
    ],
};

/// Resolve the link bundle for a category.
pub fn bundle_for_category(category: &str) -> &'static LinkBundle {
    CATEGORY_BUNDLES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, bundle)| bundle)
        .unwrap_or(&DEFAULT_BUNDLE)
}

// =============================================================================
// AnswerSections
// =============================================================================

/// The named sections of an answer, assembled as data and rendered last.
#[derive(Debug, Clone)]
pub struct AnswerSections {
    /// Persona-voiced overview text, including the FAQ answer itself.
    pub overview: String,
    /// Link suggestions, typically the answering category's bundle.
    pub links: Option<&'static LinkBundle>,
    /// Related questions selected by the rotator.
    pub related: Vec<FaqItem>,
}

impl AnswerSections {
    /// Start a response with only an overview.
    pub fn new(overview: impl Into<String>) -> Self {
        Self {
            overview: overview.into(),
            links: None,
            related: Vec::new(),
        }
    }

    /// Attach the link bundle for a category.
    pub fn with_links(mut self, category: &str) -> Self {
        self.links = Some(bundle_for_category(category));
        self
    }

    /// Attach related questions.
    pub fn with_related(mut self, related: Vec<FaqItem>) -> Self {
        self.related = related;
        self
    }

    /// Render the sections to the final answer text.
    pub fn render(&self) -> String {
        let mut out = self.overview.clone();

        if let Some(bundle) = self.links {
            out.push_str("\n\n📌 ");
            out.push_str(bundle.title);
            out.push(':');
            for link in bundle.links {
                out.push_str(&format!("\n- [{}]({})", link.label, link.url));
            }
        }

        if !self.related.is_empty() {
            out.push_str("\n\n💬 You might also ask:");
            for item in &self.related {
                out.push_str(&format!("\n• {}", item.question));
            }
        }

        out
    }
}

// =============================================================================
// Tests
// =============================================================================
