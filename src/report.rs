//! CSV serialization of a batch's verdicts. Fixed column schema, one row per
//! input in input order, overwritten on each run.

use crate::verdict::TestVerdict;
use std::io;
use std::path::Path;

pub const REPORT_HEADER: &str =
    "original_text,original_pred,transformed_text,transformed_pred,passed,status,error";

/// Write the full verdict sequence to `path`, substituting defaults for
/// absent fields: `passed=false`, `status=ok`, `error=""`.
pub fn write_report(path: &Path, verdicts: &[TestVerdict]) -> io::Result<()> {
    let mut content = String::from(REPORT_HEADER);
    content.push('\n');

    for verdict in verdicts {
        content.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            csv_field(&verdict.original_text),
            csv_field(verdict.original_pred.as_deref().unwrap_or("")),
            csv_field(verdict.transformed_text.as_deref().unwrap_or("")),
            csv_field(verdict.transformed_pred.as_deref().unwrap_or("")),
            verdict.passed.unwrap_or(false),
            verdict.status,
            csv_field(verdict.error.as_deref().unwrap_or("")),
        ));
    }

    std::fs::write(path, content)
}

/// Quote a field when it contains a delimiter, quote, or newline.
fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::TestVerdict;
    use tempfile::tempdir;

    fn pass_verdict(text: &str) -> TestVerdict {
        TestVerdict::completed(
            text.to_string(),
            "Positive".to_string(),
            format!("{} really", text),
            "Positive".to_string(),
        )
    }

    // -- csv_field --

    #[test]
    fn test_csv_field_plain() {
        assert_eq!(csv_field("hello"), "hello");
    }

    #[test]
    fn test_csv_field_with_comma_is_quoted() {
        assert_eq!(csv_field("okay, but great"), "\"okay, but great\"");
    }

    #[test]
    fn test_csv_field_with_quote_is_doubled() {
        assert_eq!(csv_field("a \"great\" film"), "\"a \"\"great\"\" film\"");
    }

    #[test]
    fn test_csv_field_with_newline_is_quoted() {
        assert_eq!(csv_field("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn test_csv_field_empty() {
        assert_eq!(csv_field(""), "");
    }

    // -- write_report --

    #[test]
    fn test_report_header_row() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        write_report(&path, &[]).expect("write");

        let content = std::fs::read_to_string(&path).expect("read");
        assert_eq!(content, format!("{}\n", REPORT_HEADER));
    }

    #[test]
    fn test_report_row_count_matches_verdicts() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        let verdicts = vec![pass_verdict("a b"), pass_verdict("c d"), pass_verdict("e f")];
        write_report(&path, &verdicts).expect("write");

        let content = std::fs::read_to_string(&path).expect("read");
        // Header + one row per verdict.
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn test_report_preserves_input_order() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        let verdicts = vec![pass_verdict("first case"), pass_verdict("second case")];
        write_report(&path, &verdicts).expect("write");

        let content = std::fs::read_to_string(&path).expect("read");
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[1].starts_with("first case,"));
        assert!(lines[2].starts_with("second case,"));
    }

    #[test]
    fn test_report_error_verdict_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        let verdicts = vec![TestVerdict::errored(
            "bad input".to_string(),
            None,
            None,
            "element not found".to_string(),
        )];
        write_report(&path, &verdicts).expect("write");

        let content = std::fs::read_to_string(&path).expect("read");
        let row = content.lines().nth(1).expect("row");
        assert_eq!(row, "bad input,,,,false,error,element not found");
    }

    #[test]
    fn test_report_error_verdict_keeps_partials() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        let verdicts = vec![TestVerdict::errored(
            "good start".to_string(),
            Some("Positive".to_string()),
            Some("good really start".to_string()),
            "timeout".to_string(),
        )];
        write_report(&path, &verdicts).expect("write");

        let content = std::fs::read_to_string(&path).expect("read");
        let row = content.lines().nth(1).expect("row");
        assert_eq!(
            row,
            "good start,Positive,good really start,,false,error,timeout"
        );
    }

    #[test]
    fn test_report_failed_relation_row() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        let verdicts = vec![TestVerdict::completed(
            "meh".to_string(),
            "Neutral".to_string(),
            "meh very".to_string(),
            "Negative".to_string(),
        )];
        write_report(&path, &verdicts).expect("write");

        let content = std::fs::read_to_string(&path).expect("read");
        let row = content.lines().nth(1).expect("row");
        assert_eq!(row, "meh,Neutral,meh very,Negative,false,ok,");
    }

    #[test]
    fn test_report_quotes_commas_in_text() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        let verdicts = vec![TestVerdict::completed(
            "The service was okay, but the food was great".to_string(),
            "Positive".to_string(),
            "The really service was okay, but the food was great".to_string(),
            "Positive".to_string(),
        )];
        write_report(&path, &verdicts).expect("write");

        let content = std::fs::read_to_string(&path).expect("read");
        let row = content.lines().nth(1).expect("row");
        assert!(row.starts_with("\"The service was okay, but the food was great\","));
    }

    #[test]
    fn test_report_overwrites_previous_run() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        write_report(&path, &[pass_verdict("a b"), pass_verdict("c d")]).expect("write");
        write_report(&path, &[pass_verdict("e f")]).expect("write");

        let content = std::fs::read_to_string(&path).expect("read");
        assert_eq!(content.lines().count(), 2);
        assert!(content.lines().nth(1).expect("row").starts_with("e f,"));
    }
}
