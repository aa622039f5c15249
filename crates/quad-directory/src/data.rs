//! Seed data for the program catalog.

use crate::{Department, Program};

fn program(
    id: &str,
    name: &str,
    degree: &str,
    department_id: &str,
    description: &str,
    aliases: &[&str],
) -> Program {
    Program {
        id: id.to_string(),
        name: name.to_string(),
        degree: degree.to_string(),
        department_id: department_id.to_string(),
        description: description.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
    }
}

fn department(id: &str, name: &str, description: &str, icon: &str) -> Department {
    Department {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

pub(crate) fn seed_departments() -> Vec<Department> {
    vec![
        department(
            "computer-science",
            "Department of Computer Science",
            "Undergraduate and postgraduate programs in computing, data, and security.",
            "cpu",
        ),
        department(
            "commerce-management",
            "Department of Commerce & Management",
            "Commerce, business administration, and management studies.",
            "briefcase",
        ),
        department(
            "arts-humanities",
            "Department of Arts & Humanities",
            "Languages, literature, and liberal arts programs.",
            "book-open",
        ),
        department(
            "sciences",
            "Department of Sciences",
            "Mathematics and natural science programs.",
            "flask",
        ),
    ]
}

pub(crate) fn seed_programs() -> Vec<Program> {
    vec![
        program(
            "bsc-cs",
            "BSc Computer Science",
            "BSc",
            "computer-science",
            "Three-year program covering programming, systems, and software engineering.",
            &["bsc computer science", "computer science", "bsc cs"],
        ),
        program(
            "bsc-ai-ml",
            "BSc Artificial Intelligence & Machine Learning",
            "BSc",
            "computer-science",
            "Specialized program in AI foundations, machine learning, and data engineering.",
            &["bsc ai ml", "artificial intelligence", "machine learning", "ai and ml"],
        ),
        program(
            "bsc-cyber-forensic",
            "BSc Cyber Forensic & Data Analytics",
            "BSc",
            "computer-science",
            "Security-focused program in digital forensics and applied data analytics.",
            &["cyber forensic", "cyber security", "data analytics"],
        ),
        program(
            "bca",
            "Bachelor of Computer Applications",
            "BCA",
            "computer-science",
            "Application-oriented computing degree with industry projects.",
            &["bca", "computer applications"],
        ),
        program(
            "msc-cs",
            "MSc Computer Science",
            "MSc",
            "computer-science",
            "Postgraduate program with research tracks in systems and intelligent computing.",
            &["msc computer science", "msc cs"],
        ),
        program(
            "bcom",
            "Bachelor of Commerce",
            "BCom",
            "commerce-management",
            "Commerce degree covering accounting, finance, and taxation.",
            &["bcom", "bachelor of commerce", "commerce degree"],
        ),
        program(
            "bba",
            "Bachelor of Business Administration",
            "BBA",
            "commerce-management",
            "Management degree with marketing, HR, and entrepreneurship tracks.",
            &["bba", "business administration"],
        ),
        program(
            "mcom",
            "Master of Commerce",
            "MCom",
            "commerce-management",
            "Postgraduate commerce program in advanced accounting and finance.",
            &["mcom", "master of commerce"],
        ),
        program(
            "ba-english",
            "BA English Literature",
            "BA",
            "arts-humanities",
            "Literature program spanning classics, criticism, and creative writing.",
            &["ba english", "english literature"],
        ),
        program(
            "bsc-maths",
            "BSc Mathematics",
            "BSc",
            "sciences",
            "Mathematics program covering analysis, algebra, and applied statistics.",
            &["bsc mathematics", "bsc maths", "mathematics degree"],
        ),
    ]
}
