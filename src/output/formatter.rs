//! Output formatters - console, JSON, and Markdown

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::output::report::{MatchReport, RankingReport, Report};
use colored::Colorize;
use std::fmt::Write;

/// Trait for rendering reports into a printable string.
pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Builds the formatter matching the configured output format.
pub fn formatter_for(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(
            config.color_output,
            config.detailed,
        )),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    }
}

/// Console formatter with optional colors.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn score(&self, value: f64) -> String {
        let rendered = format!("{:.2}%", value);
        if !self.use_colors {
            return rendered;
        }
        if value >= 75.0 {
            rendered.green().to_string()
        } else if value >= 50.0 {
            rendered.yellow().to_string()
        } else {
            rendered.red().to_string()
        }
    }

    fn format_match(&self, report: &MatchReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.heading("Extracted Resume Insights"));

        let skills = if report.profile.skills.is_empty() {
            "Not detected".to_string()
        } else {
            report.profile.skills.join(", ")
        };
        let _ = writeln!(out, "  Skills: {}", skills);

        let exp = &report.profile.experience;
        let _ = writeln!(
            out,
            "  Experience: {} years, {} months (raw total {}, approx)",
            exp.years,
            exp.months,
            exp.raw_total()
        );

        let education = if report.profile.education.is_empty() {
            "Not detected".to_string()
        } else {
            report.profile.education.join(", ")
        };
        let _ = writeln!(out, "  Education: {}", education);

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.heading("Best Matched Job Roles"));
        if report.top_jobs.is_empty() {
            let _ = writeln!(out, "  No jobs available");
        }
        for (i, job) in report.top_jobs.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} at {} - {}",
                i + 1,
                job.title,
                job.company,
                self.score(job.score)
            );
        }
        out
    }

    fn format_ranking(&self, report: &RankingReport) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}",
            self.heading(&format!("Job Overview: {}", report.job.title))
        );
        let _ = writeln!(out, "  Company: {}", report.job.company);
        let _ = writeln!(out, "  Industry: {}", report.job.industry);
        let _ = writeln!(out, "  Location: {}", report.job.location);
        if self.detailed {
            let _ = writeln!(out, "  Description: {}", report.job.description);
            let _ = writeln!(
                out,
                "  Required Skills: {}",
                report.job.required_skills.join(", ")
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.heading("Top Matching Candidates"));
        if report.candidates.is_empty() {
            let _ = writeln!(out, "  No precomputed matches for this job");
        }
        for (i, c) in report.candidates.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} - {}",
                i + 1,
                c.candidate.name,
                c.candidate.desired_role
            );
            let _ = writeln!(
                out,
                "     Match Score: {} | Skill Match: {} | Experience Fit: {}",
                self.score(c.final_match_score),
                self.score(c.skill_match_percent),
                self.score(c.experience_fit_percent)
            );
            if self.detailed {
                let _ = writeln!(
                    out,
                    "     Location: {} | Availability: {}",
                    c.candidate.location, c.candidate.availability
                );
                let _ = writeln!(
                    out,
                    "     Education: {} | Certifications: {}",
                    c.candidate.education, c.candidate.certifications
                );
            }
        }
        out
    }

    fn format_ats(&self, card: &crate::matching::ATSScorecard) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.heading("ATS Resume Scorecard"));
        let _ = writeln!(out, "  Word Count: {}", card.word_count);
        let _ = writeln!(out, "  Characters: {}", card.character_count);
        let _ = writeln!(out, "  Bullet Points Found: {}", card.bullet_points);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.heading("Tips to Improve Resume"));
        for tip in &card.tips {
            let _ = writeln!(out, "  - {}", tip);
        }
        out
    }

    fn format_insights(&self, insights: &crate::dataset::DatasetInsights) -> String {
        let mut out = String::new();

        let sections: [(&str, &[(String, usize)]); 3] = [
            ("Job Distribution by Role", &insights.top_job_titles),
            ("Most In-Demand Skills", &insights.top_required_skills),
            ("Candidate Education Levels", &insights.top_education_levels),
        ];

        for (title, rows) in sections {
            let _ = writeln!(out, "{}", self.heading(title));
            if rows.is_empty() {
                let _ = writeln!(out, "  No data available");
            }
            for (value, count) in rows {
                let _ = writeln!(out, "  {:>4}  {}", count, value);
            }
            let _ = writeln!(out);
        }
        out
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        Ok(match report {
            Report::Match(r) => self.format_match(r),
            Report::Ranking(r) => self.format_ranking(r),
            Report::Ats(card) => self.format_ats(card),
            Report::Insights(insights) => self.format_insights(insights),
        })
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

/// JSON formatter for structured consumption.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Markdown formatter for documentation and reports.
pub struct MarkdownFormatter;

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut out = String::new();
        match report {
            Report::Match(r) => {
                let _ = writeln!(out, "## Extracted Resume Insights\n");
                let _ = writeln!(out, "- **Skills:** {}", r.profile.skills.join(", "));
                let _ = writeln!(
                    out,
                    "- **Experience:** {} years, {} months",
                    r.profile.experience.years, r.profile.experience.months
                );
                let _ = writeln!(out, "- **Education:** {}", r.profile.education.join(", "));
                let _ = writeln!(out, "\n## Best Matched Job Roles\n");
                for job in &r.top_jobs {
                    let _ = writeln!(
                        out,
                        "- **{}** at *{}* - {:.2}%",
                        job.title, job.company, job.score
                    );
                }
            }
            Report::Ranking(r) => {
                let _ = writeln!(out, "## Top Candidates for {}\n", r.job.title);
                let _ = writeln!(
                    out,
                    "| # | Name | Role | Match | Skills | Experience |"
                );
                let _ = writeln!(out, "|---|------|------|-------|--------|------------|");
                for (i, c) in r.candidates.iter().enumerate() {
                    let _ = writeln!(
                        out,
                        "| {} | {} | {} | {:.2}% | {:.2}% | {:.2}% |",
                        i + 1,
                        c.candidate.name,
                        c.candidate.desired_role,
                        c.final_match_score,
                        c.skill_match_percent,
                        c.experience_fit_percent
                    );
                }
            }
            Report::Ats(card) => {
                let _ = writeln!(out, "## ATS Resume Scorecard\n");
                let _ = writeln!(out, "- **Word Count:** {}", card.word_count);
                let _ = writeln!(out, "- **Characters:** {}", card.character_count);
                let _ = writeln!(out, "- **Bullet Points:** {}", card.bullet_points);
                let _ = writeln!(out, "\n### Tips to Improve Resume\n");
                for tip in &card.tips {
                    let _ = writeln!(out, "- {}", tip);
                }
            }
            Report::Insights(insights) => {
                let sections: [(&str, &[(String, usize)]); 3] = [
                    ("Job Distribution by Role", &insights.top_job_titles),
                    ("Most In-Demand Skills", &insights.top_required_skills),
                    ("Candidate Education Levels", &insights.top_education_levels),
                ];
                for (title, rows) in sections {
                    let _ = writeln!(out, "## {}\n", title);
                    for (value, count) in rows {
                        let _ = writeln!(out, "- {} ({})", value, count);
                    }
                    let _ = writeln!(out);
                }
            }
        }
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}
