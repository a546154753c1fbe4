//! Circle area report: read a radius, compute, explain each step

use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{format_float, parse_radius, CircleArea};

pub const BANNER: &str = "=== Circle Area Computation Program ===";
pub const PROMPT: &str = "Please enter the radius of the circle: ";
pub const FORMULA: &str = "The formula used is: Area = π × radius²";
pub const SEPARATOR: &str = "=========================================";

/// Runs one input → compute → report cycle over the given console handles.
///
/// The reporter holds no state between runs: the same input always yields the
/// same bytes on `output`.
pub struct CircleAreaReporter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CircleAreaReporter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt for a radius and print the full report.
    ///
    /// Lines written before a failure stay written; nothing is written after it.
    ///
    /// # Errors
    /// - [`ApplicationError::EndOfInput`] if no line can be read
    /// - [`ApplicationError::Domain`] if the text is not a float or squaring overflows
    /// - [`ApplicationError::Io`] if a console handle fails
    #[instrument(skip(self))]
    pub fn run(&mut self) -> ApplicationResult<CircleArea> {
        self.line(BANNER)?;
        self.prompt(PROMPT)?;

        let text = self.read_line()?;
        let radius = parse_radius(&text)?;
        debug!(input = %text, radius, "parsed radius");
        self.line(&format!("You entered the radius: {}", format_float(radius)))?;

        let circle = CircleArea::compute(radius)?;
        debug!(?circle, "computed area");

        let radius = format_float(circle.radius);
        let squared = format_float(circle.radius_squared);
        let pi = format_float(circle.pi);

        self.line(FORMULA)?;
        self.line(&format!(
            "Step 1: Square the radius → {radius} × {radius} = {squared}"
        ))?;
        self.line(&format!("Step 2: Multiply by π ( {pi} ) → {pi} × {squared}"))?;
        self.line(SEPARATOR)?;
        self.line(&format!(
            "The computed area of the circle is: {}",
            format_float(circle.rounded_area())
        ))?;
        self.line(SEPARATOR)?;
        self.output.flush().with_context("flush report")?;

        Ok(circle)
    }

    fn line(&mut self, text: &str) -> ApplicationResult<()> {
        writeln!(self.output, "{text}").with_context("write report line")
    }

    fn prompt(&mut self, text: &str) -> ApplicationResult<()> {
        write!(self.output, "{text}").with_context("write prompt")?;
        self.output.flush().with_context("flush prompt")
    }

    /// Read one line without its terminator.
    fn read_line(&mut self) -> ApplicationResult<String> {
        let mut buf = String::new();
        let n = self.input.read_line(&mut buf).with_context("read radius")?;
        if n == 0 {
            return Err(ApplicationError::EndOfInput);
        }

        let content_len = buf
            .strip_suffix('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).len());
        if let Some(len) = content_len {
            buf.truncate(len);
        }
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(input: &str) -> (ApplicationResult<CircleArea>, String) {
        let mut out = Vec::new();
        let result = CircleAreaReporter::new(input.as_bytes(), &mut out).run();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_read_line_strips_crlf() {
        let (result, out) = run_with("2\r\n");
        assert!(result.is_ok());
        assert!(out.contains("You entered the radius: 2.0\n"));
    }

    #[test]
    fn test_read_line_without_newline() {
        let (result, _) = run_with("2");
        assert_eq!(result.unwrap().radius, 2.0);
    }

    #[test]
    fn test_only_first_line_is_read() {
        let (result, _) = run_with("3\nabc\n");
        assert_eq!(result.unwrap().radius, 3.0);
    }

    #[test]
    fn test_separator_width() {
        assert_eq!(SEPARATOR.len(), 41);
        assert!(SEPARATOR.chars().all(|c| c == '='));
    }
}
