//! Review rendering boundary.
//!
//! The review step consumes a read-only snapshot and produces a textual
//! preview; the export collaborator turns that preview into a document
//! file named after the user. Placeholder copy mirrors the preview shown
//! while a section is still empty.

use crate::models::ResumeDocument;

fn heading(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.len()));
    out.push('\n');
}

fn date_range(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => format!("{start} - Present"),
        (true, false) => format!("until {end}"),
        (false, false) => format!("{start} - {end}"),
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Renders the document as the plain-text review preview.
pub fn render_text(doc: &ResumeDocument) -> String {
    let info = &doc.personal_info;
    let mut out = String::new();

    let name = format!("{} {}", info.first_name, info.last_name);
    out.push_str(&or_placeholder(name.trim(), "YOUR NAME").to_uppercase());
    out.push('\n');
    out.push_str(or_placeholder(&doc.job_title, "Your Profession"));
    out.push('\n');

    if !info.phone.is_empty() {
        out.push_str(&format!("Phone: {}\n", info.phone));
    }
    if !info.email.is_empty() {
        out.push_str(&format!("Email: {}\n", info.email));
    }
    let address_parts: Vec<&str> = [
        info.address.as_str(),
        info.city.as_str(),
        info.state.as_str(),
        info.zip_code.as_str(),
        info.country.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();
    if !address_parts.is_empty() {
        out.push_str(&format!("Address: {}\n", address_parts.join(", ")));
    }
    if !info.portfolio.is_empty() {
        out.push_str(&format!("Portfolio: {}\n", info.portfolio));
    }
    if !info.linkedin.is_empty() {
        out.push_str(&format!("LinkedIn: {}\n", info.linkedin));
    }
    if let Some(social) = &doc.contact_info.other_social {
        out.push_str(&format!("{}: {}\n", social.platform, social.url));
    }

    heading(&mut out, "CAREER SUMMARY");
    out.push_str(or_placeholder(
        &doc.career_summary,
        "Please add your career summary to showcase your professional background and expertise.",
    ));
    out.push('\n');

    heading(&mut out, "SKILLS");
    if doc.skills.is_empty() {
        out.push_str("Add your skills\n");
    } else {
        for skill in &doc.skills {
            out.push_str(&format!("- {skill}\n"));
        }
    }

    if !doc.work_experience.is_empty() {
        heading(&mut out, "WORK EXPERIENCE");
        for exp in &doc.work_experience {
            out.push_str(&format!("{} at {}\n", exp.position, exp.company));
            let range = date_range(&exp.start_date, &exp.end_date);
            if !range.is_empty() {
                out.push_str(&format!("{range}\n"));
            }
            if !exp.responsibilities.is_empty() {
                out.push_str(&format!("{}\n", exp.responsibilities));
            }
            if !exp.skills.is_empty() {
                out.push_str(&format!("Skills: {}\n", exp.skills.join(", ")));
            }
            out.push('\n');
        }
    }

    if !doc.education.is_empty() {
        heading(&mut out, "EDUCATION");
        for edu in &doc.education {
            out.push_str(&format!("{} in {}, {}\n", edu.degree, edu.major, edu.institution));
            let range = date_range(&edu.start_date, &edu.end_date);
            if !range.is_empty() {
                out.push_str(&format!("{range}\n"));
            }
            out.push('\n');
        }
    }

    if !doc.certifications.is_empty() {
        heading(&mut out, "CERTIFICATIONS");
        for cert in &doc.certifications {
            out.push_str(&format!("{} ({})\n", cert.title, cert.organization));
            if !cert.issue_date.is_empty() {
                out.push_str(&format!("Issued {}\n", cert.issue_date));
            }
            if !cert.expiry_date.is_empty() {
                out.push_str(&format!("Expires {}\n", cert.expiry_date));
            }
            out.push('\n');
        }
    }

    out
}

/// Download filename for the exported document.
pub fn suggested_filename(doc: &ResumeDocument) -> String {
    format!(
        "Resume_{}_{}.pdf",
        doc.personal_info.first_name, doc.personal_info.last_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CertificationItem, WorkExperienceItem};

    #[test]
    fn test_render_shows_placeholders_for_empty_document() {
        let text = render_text(&ResumeDocument::default());
        assert!(text.starts_with("YOUR NAME\n"));
        assert!(text.contains("Your Profession"));
        assert!(text.contains("Add your skills"));
        assert!(!text.contains("WORK EXPERIENCE"));
    }

    #[test]
    fn test_render_includes_filled_sections() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.first_name = "Ada".to_string();
        doc.personal_info.last_name = "Lovelace".to_string();
        doc.job_title = "Engineer".to_string();
        doc.skills = vec!["Rust".to_string()];
        doc.work_experience.push(WorkExperienceItem {
            company: "Acme".to_string(),
            position: "Lead".to_string(),
            start_date: "01/01/2020".to_string(),
            end_date: "".to_string(),
            responsibilities: "Ran the platform team.".to_string(),
            skills: vec!["Go".to_string()],
            achievements: vec![],
        });
        doc.certifications.push(CertificationItem {
            title: "CKA".to_string(),
            organization: "CNCF".to_string(),
            issue_date: "15/05/2022".to_string(),
            expiry_date: "".to_string(),
        });

        let text = render_text(&doc);
        assert!(text.starts_with("ADA LOVELACE\n"));
        assert!(text.contains("Lead at Acme"));
        assert!(text.contains("01/01/2020 - Present"));
        assert!(text.contains("- Rust"));
        assert!(text.contains("CKA (CNCF)"));
        assert!(!text.contains("Expires"));
    }

    #[test]
    fn test_filename_uses_first_and_last_name() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.first_name = "Ada".to_string();
        doc.personal_info.last_name = "Lovelace".to_string();
        assert_eq!(suggested_filename(&doc), "Resume_Ada_Lovelace.pdf");
    }
}
