//! Course enumeration from the intranet landing page.

use scraper::{Html, Selector};

use crate::browser::wait::{self, DEFAULT_POLL, DEFAULT_TIMEOUT};
use crate::browser::Session;
use crate::error::Result;

/// Container holding the logged-in user's course links.
const COURSE_LIST_SELECTOR: &str = "div.course_list_for_user";

/// An enrolled course as listed on the intranet landing page.
///
/// `url` is the portal-relative path from the anchor's href, kept verbatim.
/// Courses are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub url: String,
    pub name: String,
}

/// Extract the list of enrolled courses from the current page.
///
/// An empty list is valid (no enrolled courses), not an error.
pub async fn list_courses(session: &Session) -> Result<Vec<Course>> {
    let container = wait::present(
        session.driver(),
        COURSE_LIST_SELECTOR,
        DEFAULT_TIMEOUT,
        DEFAULT_POLL,
    )
    .await?;
    let html = container.inner_html().await?;
    Ok(parse_course_list(&html))
}

/// Parse the course-list container markup into courses, one per anchor,
/// in document order. Names are trimmed; hrefs are taken verbatim.
pub fn parse_course_list(html: &str) -> Vec<Course> {
    let fragment = Html::parse_fragment(html);
    let anchor = Selector::parse("a").unwrap();

    fragment
        .select(&anchor)
        .map(|a| Course {
            url: a.value().attr("href").unwrap_or_default().to_string(),
            name: a.text().collect::<String>().trim().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_document_order() {
        let html = r#"
            <ul>
                <li><a href="/predmet/oop">  Object-Oriented Programming </a></li>
                <li><a href="/predmet/mat2">Mathematics 2</a></li>
                <li><a href="/predmet/fiz">Physics</a></li>
            </ul>
        "#;

        let courses = parse_course_list(html);
        assert_eq!(courses.len(), 3);
        assert_eq!(
            courses[0],
            Course {
                url: "/predmet/oop".to_string(),
                name: "Object-Oriented Programming".to_string(),
            }
        );
        assert_eq!(courses[1].url, "/predmet/mat2");
        assert_eq!(courses[2].name, "Physics");
    }

    #[test]
    fn test_parse_keeps_href_verbatim() {
        let html = r#"<a href="/predmet/oop?lang=en#top">OOP</a>"#;
        let courses = parse_course_list(html);
        assert_eq!(courses[0].url, "/predmet/oop?lang=en#top");
    }

    #[test]
    fn test_parse_anchor_without_href() {
        let html = r#"<a>Nameless link</a>"#;
        let courses = parse_course_list(html);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].url, "");
    }

    #[test]
    fn test_parse_empty_fragment() {
        assert!(parse_course_list("").is_empty());
        assert!(parse_course_list("<p>No courses here</p>").is_empty());
    }

    #[test]
    fn test_parse_nested_markup_in_name() {
        let html = r#"<a href="/predmet/sig"><span>Security</span> <b>(elective)</b></a>"#;
        let courses = parse_course_list(html);
        assert_eq!(courses[0].name, "Security (elective)");
    }
}
