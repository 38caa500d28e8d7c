//! Console report formatting, kept as pure line building so it stays
//! testable; `main` does the actual printing.

use scout_core::RunReport;

pub fn report_lines(report: &RunReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Найдено {} статей на странице.",
        report.candidates_discovered
    )];

    if report.has_matches() {
        lines.push(String::new());
        lines.push("Найдены статьи, содержащие ключевые слова:".to_string());
        lines.push(String::new());
        for matched in &report.matches {
            lines.push(matched.report_line());
        }
    } else {
        lines.push("Статьи с указанными ключевыми словами не найдены.".to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::report_lines;
    use scout_core::{MatchResult, RunReport};

    #[test]
    fn matches_are_listed_one_per_line() {
        let report = RunReport {
            candidates_discovered: 5,
            matches: vec![
                MatchResult {
                    date: "2024-05-06".to_string(),
                    title: "Python на проде".to_string(),
                    link: "https://habr.com/ru/articles/1/".to_string(),
                },
                MatchResult {
                    date: "Неизвестно".to_string(),
                    title: "Про web".to_string(),
                    link: "https://habr.com/ru/articles/2/".to_string(),
                },
            ],
        };

        let lines = report_lines(&report);
        assert_eq!(lines[0], "Найдено 5 статей на странице.");
        assert_eq!(
            lines[4],
            "2024-05-06 – Python на проде – https://habr.com/ru/articles/1/"
        );
        assert_eq!(
            lines[5],
            "Неизвестно – Про web – https://habr.com/ru/articles/2/"
        );
    }

    #[test]
    fn empty_report_prints_the_fixed_no_matches_message() {
        let lines = report_lines(&RunReport::empty());
        assert_eq!(
            lines,
            vec![
                "Найдено 0 статей на странице.".to_string(),
                "Статьи с указанными ключевыми словами не найдены.".to_string(),
            ]
        );
    }
}
