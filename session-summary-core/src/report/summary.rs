use std::fmt::{self, Write};

use tracing::{debug, trace};

use super::{ReportConfig, ReportError, Reporter};
use crate::format::format_seconds;
use crate::solve::{real_times, Attempt, Category, RealTime};
use crate::stats::{
    find_extremes, Best, BestAverage, Mean, StandardDeviation, StatisticalMeasure, Worst,
};

/// Renders the plain-text session summary.
///
/// The report lists the category, the time span of the session, the
/// aggregate statistics, the best average for every configured window size
/// and every solve with its scramble, oldest first.
#[derive(Debug, Clone, Default)]
pub struct SummaryReporter {
    config: ReportConfig,
}

/// Render a summary with the default configuration.
pub fn generate_report(category: &Category, attempts: &[Attempt]) -> String {
    SummaryReporter::default().render(category, attempts)
}

impl SummaryReporter {
    /// Create a reporter from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not pass [`ReportConfig::validate`].
    pub fn new(config: ReportConfig) -> Result<Self, ReportError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    fn write_summary<W: Write>(
        &self,
        out: &mut W,
        category: &Category,
        attempts: &[Attempt],
    ) -> fmt::Result {
        let times = real_times(attempts);

        writeln!(out, "{}", category.description)?;

        if !attempts.is_empty() {
            self.write_span(out, attempts)?;
            self.write_statistics(out, &times)?;
        }

        for &window_size in &self.config.window_sizes {
            self.write_best_average(out, &times, window_size)?;
        }

        self.write_solves(out, attempts, &times)
    }

    /// Print the start of the oldest solve and the end of the most recent one.
    fn write_span<W: Write>(&self, out: &mut W, attempts: &[Attempt]) -> fmt::Result {
        let (Some(latest), Some(earliest)) = (attempts.first(), attempts.last()) else {
            return Ok(());
        };

        writeln!(
            out,
            "{} - {}",
            earliest
                .solve
                .timing
                .start
                .format(&self.config.date_time_format),
            latest.solve.timing.end.format(&self.config.time_format)
        )?;
        writeln!(out)
    }

    /// Print mean, standard deviation, best and worst with values right-aligned.
    fn write_statistics<W: Write>(&self, out: &mut W, times: &[RealTime]) -> fmt::Result {
        let depth = self.config.max_history_depth();
        let measures: [(&str, Box<dyn StatisticalMeasure>); 4] = [
            ("Mean:", Box::new(Mean::new(1, depth))),
            ("Standard deviation:", Box::new(StandardDeviation::new(1, depth))),
            ("Best Time:", Box::new(Best::new(1, depth))),
            ("Worst Time:", Box::new(Worst::new(1, depth))),
        ];

        let rows: Vec<(&str, String)> = measures
            .iter()
            .map(|(label, measure)| (*label, format_seconds(measure.measure(times).value)))
            .collect();
        let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);
        let label_width = self.config.label_width;

        for (label, value) in &rows {
            writeln!(
                out,
                "{:<label_width$.label_width$} {:>value_width$}",
                label,
                value,
                label_width = label_width,
                value_width = value_width,
            )?;
        }
        trace!(value_width, "rendered statistics block");

        writeln!(out)
    }

    /// Print the best average of `window_size` with the window's times,
    /// parenthesizing the discarded best and worst.
    ///
    /// Skipped when fewer than `window_size` solves fall within the history depth.
    fn write_best_average<W: Write>(
        &self,
        out: &mut W,
        times: &[RealTime],
        window_size: usize,
    ) -> fmt::Result {
        let depth = self.config.max_history_depth();
        let eligible = times.len().min(depth);

        if eligible < window_size {
            debug!(
                window_size,
                solves = times.len(),
                history_depth = depth,
                "not enough eligible solves for best average, skipping"
            );
            return Ok(());
        }

        let result = BestAverage::new(window_size, depth).measure(times);
        let position = result
            .window_position
            .expect("best average always reports a window position");
        debug!(window_size, position, value = ?result.value, "best average window");

        writeln!(
            out,
            "Best average of {}: {}",
            window_size,
            format_seconds(result.value)
        )?;

        // Numbered from the oldest solve, matching the solve listing.
        let total = times.len();
        let first = total - position - window_size + 1;
        let last = total - position;

        let window: Vec<RealTime> = times[position..position + window_size]
            .iter()
            .rev()
            .copied()
            .collect();
        let extremes = find_extremes(&window);

        let rendered: Vec<String> = window
            .iter()
            .enumerate()
            .map(|(index, &time)| {
                if extremes.contains(index) {
                    format!("({})", format_seconds(time))
                } else {
                    format_seconds(time)
                }
            })
            .collect();

        writeln!(out, "  {}-{} - {}", first, last, rendered.join(" ").trim())?;
        writeln!(out)
    }

    /// Print every solve oldest first, numbered from 1.
    fn write_solves<W: Write>(
        &self,
        out: &mut W,
        attempts: &[Attempt],
        times: &[RealTime],
    ) -> fmt::Result {
        let formatted: Vec<String> = times.iter().map(|&time| format_seconds(time)).collect();
        let time_width = formatted.iter().map(String::len).max().unwrap_or(0);
        let index_width = attempts.len().to_string().len();

        for (index, attempt) in attempts.iter().enumerate().rev() {
            writeln!(
                out,
                "{:>index_width$}. {:>time_width$}  {}",
                attempts.len() - index,
                formatted[index],
                attempt.scramble_text(),
                index_width = index_width,
                time_width = time_width,
            )?;
        }
        trace!(solves = attempts.len(), time_width, "rendered solve listing");

        Ok(())
    }
}

impl Reporter for SummaryReporter {
    fn render(&self, category: &Category, attempts: &[Attempt]) -> String {
        let mut summary = String::new();
        self.write_summary(&mut summary, category, attempts)
            .expect("writing to a String cannot fail");
        summary
    }
}
